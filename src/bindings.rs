//! Page-facing entry points
//!
//! The dashboards call these with raw strings. Each call opens the store
//! fresh, so the page and the landing redirect always see the same state.

use thiserror::Error;

use crate::mode::{Mode, ModeSelector};
use crate::platform::KeyValueStore;
use crate::progress::{ProgressError, ProgressStore};

#[derive(Debug, Error)]
pub enum BindingError {
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error("unknown mode `{0}`")]
    UnknownMode(String),
    #[error("could not encode progress: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Complete a game by name and return the updated record as JSON
pub fn update_progress_json<S: KeyValueStore>(
    store: S,
    game: &str,
    xp_earned: Option<u32>,
) -> Result<String, BindingError> {
    let progress = ProgressStore::new(store);
    let record = progress.update_game_progress_by_name(game, xp_earned)?;
    Ok(serde_json::to_string(&record)?)
}

/// Current progress record as JSON
pub fn progress_json<S: KeyValueStore>(store: S) -> Result<String, BindingError> {
    let record = ProgressStore::new(store).get_progress();
    Ok(serde_json::to_string(&record)?)
}

/// Switch mode from the mode picker. Only `student` and `teacher` are accepted.
pub fn select_mode<S: KeyValueStore>(store: S, raw: &str) -> Result<Mode, BindingError> {
    let mode =
        Mode::from_str(raw).ok_or_else(|| BindingError::UnknownMode(raw.to_string()))?;
    let mut selector = ModeSelector::new(store);
    selector.on_change(mode);
    Ok(mode)
}

#[cfg(target_arch = "wasm32")]
mod exports {
    use wasm_bindgen::prelude::*;

    use super::BindingError;
    use crate::mode::ModeSelector;
    use crate::platform::open_store;

    impl From<BindingError> for JsValue {
        fn from(e: BindingError) -> Self {
            JsValue::from_str(&e.to_string())
        }
    }

    #[wasm_bindgen(js_name = updateGameProgress)]
    pub fn update_game_progress(game: &str, xp: Option<u32>) -> Result<String, JsValue> {
        Ok(super::update_progress_json(&*open_store(), game, xp)?)
    }

    #[wasm_bindgen(js_name = getProgress)]
    pub fn get_progress() -> Result<String, JsValue> {
        Ok(super::progress_json(&*open_store())?)
    }

    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(mode: &str) -> Result<(), JsValue> {
        super::select_mode(&*open_store(), mode)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = getCurrentMode)]
    pub fn get_current_mode() -> String {
        ModeSelector::new(&*open_store())
            .get_current_mode()
            .as_str()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MODE_STORAGE_KEY, PROGRESS_STORAGE_KEY};
    use crate::platform::MemoryStore;

    #[test]
    fn test_update_progress_by_name_persists() {
        let store = MemoryStore::new();

        let json = update_progress_json(&store, "debateClub", Some(25)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["debateClub"], true);
        assert_eq!(value["xp"], 25);

        let json = update_progress_json(&store, "soundDetective", None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["soundDetective"], true);
        assert_eq!(value["xp"], 35);

        assert_eq!(progress_json(&store).unwrap(), json);
    }

    #[test]
    fn test_update_unknown_game_writes_nothing() {
        let store = MemoryStore::new();
        let err = update_progress_json(&store, "chessClub", None).unwrap_err();
        assert!(matches!(err, BindingError::Progress(ProgressError::UnknownGame(_))));
        assert_eq!(store.get(PROGRESS_STORAGE_KEY), None);
    }

    #[test]
    fn test_progress_json_on_empty_store() {
        let json = progress_json(MemoryStore::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["aiQuest"], false);
        assert_eq!(value["xp"], 0);
    }

    #[test]
    fn test_select_mode() {
        let store = MemoryStore::new();
        assert_eq!(select_mode(&store, "teacher").unwrap(), Mode::Teacher);
        assert_eq!(store.get(MODE_STORAGE_KEY).as_deref(), Some("teacher"));

        let err = select_mode(&store, "admin").unwrap_err();
        assert!(matches!(err, BindingError::UnknownMode(ref m) if m == "admin"));
        assert_eq!(store.get(MODE_STORAGE_KEY).as_deref(), Some("teacher"));
    }
}
