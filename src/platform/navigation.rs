//! Page navigation

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("no window to navigate")]
    NoWindow,
    #[error("navigation to `{path}` failed: {reason}")]
    Failed { path: String, reason: String },
}

/// Replaces the current view with another route
pub trait Navigator {
    fn replace(&mut self, path: &str) -> Result<(), NavError>;
}

/// Records every requested path instead of navigating
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&mut self, path: &str) -> Result<(), NavError> {
        log::info!("Navigate -> {}", path);
        self.visited.push(path.to_string());
        Ok(())
    }
}

/// `window.location.replace` (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocationNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for LocationNavigator {
    fn replace(&mut self, path: &str) -> Result<(), NavError> {
        let window = web_sys::window().ok_or(NavError::NoWindow)?;
        window
            .location()
            .replace(path)
            .map_err(|e| NavError::Failed {
                path: path.to_string(),
                reason: format!("{:?}", e),
            })
    }
}
