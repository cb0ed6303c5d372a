//! Game progress persistence
//!
//! One JSON record under a single LocalStorage key. Every update is a full
//! read-modify-write of that record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_XP_REWARD, PROGRESS_STORAGE_KEY};
use crate::platform::KeyValueStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("unknown game `{0}`")]
    UnknownGame(String),
}

/// The six mini-games that award XP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    AiQuest,
    GrammarGalaxy,
    MysteryWords,
    DebateClub,
    RoleplayTheater,
    SoundDetective,
}

impl GameKey {
    pub const ALL: [GameKey; 6] = [
        GameKey::AiQuest,
        GameKey::GrammarGalaxy,
        GameKey::MysteryWords,
        GameKey::DebateClub,
        GameKey::RoleplayTheater,
        GameKey::SoundDetective,
    ];

    /// Identifier used in the stored record
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKey::AiQuest => "aiQuest",
            GameKey::GrammarGalaxy => "grammarGalaxy",
            GameKey::MysteryWords => "mysteryWords",
            GameKey::DebateClub => "debateClub",
            GameKey::RoleplayTheater => "roleplayTheater",
            GameKey::SoundDetective => "soundDetective",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == s)
    }
}

/// Per-game completion flags plus accumulated XP
///
/// Missing fields in stored JSON fall back to their defaults, so a partial
/// record still reads back with all six flags present. A field of the wrong
/// type (`"xp": 10.0`, `"xp": -5`, `"aiQuest": "yes"`) makes the whole record
/// unreadable, and `ProgressStore::get_progress` drops it for the default,
/// completion flags included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    pub ai_quest: bool,
    pub grammar_galaxy: bool,
    pub mystery_words: bool,
    pub debate_club: bool,
    pub roleplay_theater: bool,
    pub sound_detective: bool,
    pub xp: u32,
}

impl ProgressRecord {
    fn flag_mut(&mut self, game: GameKey) -> &mut bool {
        match game {
            GameKey::AiQuest => &mut self.ai_quest,
            GameKey::GrammarGalaxy => &mut self.grammar_galaxy,
            GameKey::MysteryWords => &mut self.mystery_words,
            GameKey::DebateClub => &mut self.debate_club,
            GameKey::RoleplayTheater => &mut self.roleplay_theater,
            GameKey::SoundDetective => &mut self.sound_detective,
        }
    }

    pub fn is_completed(&self, game: GameKey) -> bool {
        match game {
            GameKey::AiQuest => self.ai_quest,
            GameKey::GrammarGalaxy => self.grammar_galaxy,
            GameKey::MysteryWords => self.mystery_words,
            GameKey::DebateClub => self.debate_club,
            GameKey::RoleplayTheater => self.roleplay_theater,
            GameKey::SoundDetective => self.sound_detective,
        }
    }

    /// Number of games marked complete
    pub fn completed_count(&self) -> usize {
        GameKey::ALL
            .iter()
            .filter(|g| self.is_completed(**g))
            .count()
    }

    /// Mark a game complete and add XP
    pub fn complete(&mut self, game: GameKey, xp_earned: u32) {
        *self.flag_mut(game) = true;
        self.xp = self.xp.saturating_add(xp_earned);
    }
}

/// Progress record accessor over a key/value store
pub struct ProgressStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the record, falling back to the default when nothing usable is stored
    pub fn get_progress(&self) -> ProgressRecord {
        let Some(json) = self.store.get(PROGRESS_STORAGE_KEY) else {
            log::info!("No progress found, starting fresh");
            return ProgressRecord::default();
        };

        match serde_json::from_str::<ProgressRecord>(&json) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Discarding unreadable progress: {}", e);
                ProgressRecord::default()
            }
        }
    }

    /// Overwrite the stored record. Failures are logged and dropped.
    pub fn save_progress(&self, record: &ProgressRecord) {
        let json = match serde_json::to_string(record) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not serialize progress: {}", e);
                return;
            }
        };
        match self.store.set(PROGRESS_STORAGE_KEY, &json) {
            Ok(()) => log::info!("Progress saved ({} xp)", record.xp),
            Err(e) => log::warn!("Could not save progress: {}", e),
        }
    }

    /// Mark `game` complete, add `xp_earned`, persist and return the result
    pub fn update_game_progress(&self, game: GameKey, xp_earned: u32) -> ProgressRecord {
        let mut record = self.get_progress();
        record.complete(game, xp_earned);
        self.save_progress(&record);
        record
    }

    /// `update_game_progress` with the standard reward
    pub fn complete_game(&self, game: GameKey) -> ProgressRecord {
        self.update_game_progress(game, DEFAULT_XP_REWARD)
    }

    /// String entry point for callers holding a raw game identifier, with
    /// the standard reward when `xp_earned` is `None`. Unknown identifiers are
    /// rejected without touching the store.
    pub fn update_game_progress_by_name(
        &self,
        name: &str,
        xp_earned: Option<u32>,
    ) -> Result<ProgressRecord, ProgressError> {
        let game =
            GameKey::from_str(name).ok_or_else(|| ProgressError::UnknownGame(name.to_string()))?;
        Ok(self.update_game_progress(game, xp_earned.unwrap_or(DEFAULT_XP_REWARD)))
    }
}
