//! Student/teacher mode selection
//!
//! Persisted as a bare string in LocalStorage, separately from game progress.

use crate::consts::MODE_STORAGE_KEY;
use crate::platform::KeyValueStore;

/// The user's declared role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Student,
    Teacher,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Student => "student",
            Mode::Teacher => "teacher",
        }
    }

    /// Strict parse for values coming from the page
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "student" => Some(Mode::Student),
            "teacher" => Some(Mode::Teacher),
            _ => None,
        }
    }

    /// Resolve a stored value. Only the exact string `teacher` selects
    /// teacher mode; anything else, including nothing, is a student.
    pub fn resolve(stored: Option<&str>) -> Self {
        match stored {
            Some("teacher") => Mode::Teacher,
            _ => Mode::Student,
        }
    }

    /// Dashboard route for this mode
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Mode::Student => crate::consts::STUDENT_DASHBOARD,
            Mode::Teacher => crate::consts::TEACHER_DASHBOARD,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads and writes the mode flag, mirroring it into the store on every
/// resolve or change.
pub struct ModeSelector<S: KeyValueStore> {
    store: S,
    current: Option<Mode>,
}

impl<S: KeyValueStore> ModeSelector<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Mode as currently stored
    pub fn get_current_mode(&self) -> Mode {
        let stored = self.store.get(MODE_STORAGE_KEY);
        let mode = Mode::resolve(stored.as_deref());
        match stored.as_deref() {
            None => log::info!("No stored mode, using {}", mode),
            Some(raw) if raw != mode.as_str() => {
                log::warn!("Unrecognized stored mode {:?}, using {}", raw, mode)
            }
            Some(_) => {}
        }
        mode
    }

    /// Persist a mode. Write failures are logged, never returned.
    pub fn set_mode(&self, mode: Mode) {
        match self.store.set(MODE_STORAGE_KEY, mode.as_str()) {
            Ok(()) => log::info!("Mode saved ({})", mode),
            Err(e) => log::warn!("Could not save mode: {}", e),
        }
    }

    /// Mount hook: resolve from the store and write the result back so a
    /// defaulted value becomes durable.
    pub fn on_init(&mut self) -> Mode {
        let mode = self.get_current_mode();
        self.current = Some(mode);
        self.set_mode(mode);
        mode
    }

    /// Change hook: adopt the new value and write it through
    pub fn on_change(&mut self, mode: Mode) {
        self.current = Some(mode);
        self.set_mode(mode);
    }

    /// Last resolved value, `None` until `on_init` has run
    pub fn current(&self) -> Option<Mode> {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;
    use proptest::prelude::*;

    #[test]
    fn test_absent_mode_is_student() {
        let selector = ModeSelector::new(MemoryStore::new());
        assert_eq!(selector.get_current_mode(), Mode::Student);
    }

    #[test]
    fn test_stored_teacher() {
        let store = MemoryStore::with_entries([(MODE_STORAGE_KEY, "teacher")]);
        let selector = ModeSelector::new(store);
        assert_eq!(selector.get_current_mode(), Mode::Teacher);
    }

    #[test]
    fn test_set_then_get() {
        let selector = ModeSelector::new(MemoryStore::new());
        selector.set_mode(Mode::Teacher);
        assert_eq!(selector.get_current_mode(), Mode::Teacher);
        selector.set_mode(Mode::Student);
        assert_eq!(selector.get_current_mode(), Mode::Student);
    }

    #[test]
    fn test_on_init_persists_default() {
        let mut selector = ModeSelector::new(MemoryStore::new());
        assert_eq!(selector.current(), None);

        assert_eq!(selector.on_init(), Mode::Student);
        assert_eq!(selector.current(), Some(Mode::Student));
        assert_eq!(
            selector.store().get(MODE_STORAGE_KEY).as_deref(),
            Some("student")
        );
    }

    #[test]
    fn test_on_init_rewrites_malformed_value() {
        let store = MemoryStore::with_entries([(MODE_STORAGE_KEY, "Teacher ")]);
        let mut selector = ModeSelector::new(store);
        assert_eq!(selector.on_init(), Mode::Student);
        assert_eq!(
            selector.store().get(MODE_STORAGE_KEY).as_deref(),
            Some("student")
        );
    }

    #[test]
    fn test_on_change_writes_through() {
        let mut selector = ModeSelector::new(MemoryStore::new());
        selector.on_init();
        selector.on_change(Mode::Teacher);
        assert_eq!(selector.current(), Some(Mode::Teacher));
        assert_eq!(
            selector.store().get(MODE_STORAGE_KEY).as_deref(),
            Some("teacher")
        );
    }

    #[test]
    fn test_failed_write_is_swallowed() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        let mut selector = ModeSelector::new(&store);
        selector.on_change(Mode::Teacher);
        assert_eq!(selector.current(), Some(Mode::Teacher));
        assert!(store.is_empty());
    }

    #[test]
    fn test_mode_names() {
        for mode in [Mode::Student, Mode::Teacher] {
            assert_eq!(Mode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(Mode::from_str("Teacher"), None);
        assert_eq!(Mode::Teacher.dashboard_path(), "/teacher-dashboard");
        assert_eq!(Mode::Student.dashboard_path(), "/student-dashboard");
    }

    proptest! {
        #[test]
        fn prop_anything_but_teacher_is_student(raw in ".*") {
            prop_assume!(raw != "teacher");
            let store = MemoryStore::with_entries([(MODE_STORAGE_KEY, raw.as_str())]);
            let selector = ModeSelector::new(store);
            prop_assert_eq!(selector.get_current_mode(), Mode::Student);
        }
    }
}
