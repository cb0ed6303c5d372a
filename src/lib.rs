//! English Horizon - client core for the English learning web app
//!
//! Core modules:
//! - `mode`: Student/teacher mode selection, persisted in LocalStorage
//! - `redirect`: One-shot landing page redirect to the right dashboard
//! - `progress`: Mini-game completion and XP persistence
//! - `connectivity`: Offline banner state
//! - `bindings`: String entry points exported to the page
//! - `platform`: Browser/native platform abstraction

pub mod bindings;
pub mod connectivity;
pub mod mode;
pub mod platform;
pub mod progress;
pub mod redirect;

pub use connectivity::{ConnectivityStatus, OfflineIndicator};
pub use mode::{Mode, ModeSelector};
pub use progress::{GameKey, ProgressError, ProgressRecord, ProgressStore};
pub use redirect::{RedirectController, RedirectState};

/// App configuration constants
pub mod consts {
    /// LocalStorage key holding the mode string
    pub const MODE_STORAGE_KEY: &str = "userMode";
    /// LocalStorage key holding the JSON progress record
    pub const PROGRESS_STORAGE_KEY: &str = "englishHorizonProgress";

    /// Dashboard routes
    pub const STUDENT_DASHBOARD: &str = "/student-dashboard";
    pub const TEACHER_DASHBOARD: &str = "/teacher-dashboard";

    /// XP awarded for finishing a game when the caller gives no amount
    pub const DEFAULT_XP_REWARD: u32 = 10;
}
