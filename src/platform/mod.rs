//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory map elsewhere)
//! - Navigation (location.replace on web, recorded paths elsewhere)
//! - Network status (navigator.onLine on web)

pub mod navigation;
pub mod storage;

pub use navigation::{NavError, Navigator, RecordingNavigator};
pub use storage::{KeyValueStore, MemoryStore, StoreError};

#[cfg(target_arch = "wasm32")]
pub use navigation::LocationNavigator;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

/// Browser LocalStorage, or an in-memory store when the browser denies access
#[cfg(target_arch = "wasm32")]
pub fn open_store() -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Some(storage) => Box::new(storage),
        None => {
            log::warn!("LocalStorage unavailable, nothing will persist");
            Box::new(MemoryStore::new())
        }
    }
}

/// Native builds keep everything in memory
#[cfg(not(target_arch = "wasm32"))]
pub fn open_store() -> Box<dyn KeyValueStore> {
    Box::new(MemoryStore::new())
}

/// Whether the browser currently reports a network connection (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn is_online() -> bool {
    web_sys::window()
        .map(|w| w.navigator().on_line())
        .unwrap_or(true)
}

/// Native builds have no offline mode
#[cfg(not(target_arch = "wasm32"))]
pub fn is_online() -> bool {
    true
}
