//! One-shot redirect from the landing page to a dashboard

use crate::mode::Mode;
use crate::platform::Navigator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectState {
    /// Waiting for a mode; the loading indicator is shown
    #[default]
    Unresolved,
    ResolvedStudent,
    ResolvedTeacher,
}

impl RedirectState {
    fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Student => RedirectState::ResolvedStudent,
            Mode::Teacher => RedirectState::ResolvedTeacher,
        }
    }
}

/// Navigates exactly once, on the first resolved mode it sees
#[derive(Debug, Default)]
pub struct RedirectController {
    state: RedirectState,
    navigated: bool,
}

impl RedirectController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RedirectState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == RedirectState::Unresolved
    }

    /// Feed the current mode. `None` leaves the controller waiting; the first
    /// `Some` navigates and every later call is a no-op.
    ///
    /// Returns true when this call triggered the navigation.
    pub fn observe(&mut self, mode: Option<Mode>, navigator: &mut impl Navigator) -> bool {
        if self.navigated {
            return false;
        }
        let Some(mode) = mode else {
            return false;
        };

        self.state = RedirectState::for_mode(mode);
        self.navigated = true;

        let path = mode.dashboard_path();
        if let Err(e) = navigator.replace(path) {
            log::error!("Redirect to {} failed: {}", path, e);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{STUDENT_DASHBOARD, TEACHER_DASHBOARD};
    use crate::platform::{NavError, RecordingNavigator};

    struct BrokenNavigator {
        attempts: u32,
    }

    impl Navigator for BrokenNavigator {
        fn replace(&mut self, _path: &str) -> Result<(), NavError> {
            self.attempts += 1;
            Err(NavError::NoWindow)
        }
    }

    #[test]
    fn test_waits_while_unresolved() {
        let mut controller = RedirectController::new();
        let mut nav = RecordingNavigator::new();

        assert!(controller.is_loading());
        assert!(!controller.observe(None, &mut nav));
        assert!(controller.is_loading());
        assert!(nav.visited.is_empty());
    }

    #[test]
    fn test_teacher_navigates_once() {
        let mut controller = RedirectController::new();
        let mut nav = RecordingNavigator::new();

        assert!(controller.observe(Some(Mode::Teacher), &mut nav));
        assert!(!controller.observe(Some(Mode::Teacher), &mut nav));
        assert!(!controller.observe(Some(Mode::Student), &mut nav));

        assert_eq!(controller.state(), RedirectState::ResolvedTeacher);
        assert_eq!(nav.visited, vec![TEACHER_DASHBOARD.to_string()]);
    }

    #[test]
    fn test_student_after_loading() {
        let mut controller = RedirectController::new();
        let mut nav = RecordingNavigator::new();

        controller.observe(None, &mut nav);
        controller.observe(Some(Mode::Student), &mut nav);
        controller.observe(None, &mut nav);

        assert!(!controller.is_loading());
        assert_eq!(controller.state(), RedirectState::ResolvedStudent);
        assert_eq!(nav.visited, vec![STUDENT_DASHBOARD.to_string()]);
    }

    #[test]
    fn test_failed_navigation_is_not_retried() {
        let mut controller = RedirectController::new();
        let mut nav = BrokenNavigator { attempts: 0 };

        assert!(controller.observe(Some(Mode::Student), &mut nav));
        controller.observe(Some(Mode::Student), &mut nav);

        assert_eq!(nav.attempts, 1);
        assert_eq!(controller.state(), RedirectState::ResolvedStudent);
    }
}
