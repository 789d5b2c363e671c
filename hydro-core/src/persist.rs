//! Save file persistence.
//!
//! The whole game lives in one JSON snapshot that is overwritten after every
//! change and read once at startup. Writes are not atomic: a crash in the
//! middle of a save can leave a corrupt file, which then loads as a fresh
//! game with the error reported.

use crate::state::GameState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Current save file version.
pub const SAVE_VERSION: u32 = 1;

fn current_version() -> u32 {
    SAVE_VERSION
}

/// On-disk form of the game state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Save format version for compatibility checking.
    #[serde(default = "current_version")]
    pub version: u32,

    /// When the snapshot was written.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub state: GameState,
}

impl Snapshot {
    /// Wrap a state for saving, stamped with the current time.
    pub fn new(state: GameState) -> Self {
        Self {
            version: SAVE_VERSION,
            saved_at: Some(Utc::now()),
            state,
        }
    }

    /// Save to a JSON file, replacing whatever was there.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse snapshot text, rejecting versions this build does not know.
    pub fn from_json(content: &str) -> Result<Self, PersistError> {
        let mut snapshot: Self = serde_json::from_str(content)?;

        if snapshot.version != SAVE_VERSION {
            return Err(PersistError::VersionMismatch {
                expected: SAVE_VERSION,
                found: snapshot.version,
            });
        }

        snapshot.state.normalize();
        Ok(snapshot)
    }
}

/// How a load went.
#[derive(Debug)]
pub enum LoadStatus {
    /// No save file existed; a fresh game was started.
    Missing,
    /// The save file was read.
    Restored,
    /// The save file could not be used; a fresh game was started.
    Recovered(PersistError),
}

/// Result of [`load`]: always a usable state, plus what happened.
#[derive(Debug)]
pub struct Loaded {
    pub state: GameState,
    pub status: LoadStatus,
}

/// Write `state` to `path`.
pub fn save(state: &GameState, path: impl AsRef<Path>) -> Result<(), PersistError> {
    Snapshot::new(state.clone()).save_json(path)
}

/// Read the game at `path`.
///
/// Never fails: a missing file gives a fresh game, and an unreadable or
/// malformed file gives a fresh game with the error in the status.
pub fn load(path: impl AsRef<Path>) -> Loaded {
    let path = path.as_ref();
    match Snapshot::load_json(path) {
        Ok(snapshot) => Loaded {
            state: snapshot.state,
            status: LoadStatus::Restored,
        },
        Err(PersistError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Loaded {
            state: GameState::default(),
            status: LoadStatus::Missing,
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not load save, starting fresh");
            Loaded {
                state: GameState::default(),
                status: LoadStatus::Recovered(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MonsterType;

    #[test]
    fn test_snapshot_creation() {
        let snapshot = Snapshot::new(GameState::new());
        assert_eq!(snapshot.version, SAVE_VERSION);
        assert!(snapshot.saved_at.is_some());
    }

    #[test]
    fn test_snapshot_json_is_flat() {
        let json = serde_json::to_value(Snapshot::new(GameState::new())).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["selected_type"], "blob");
        assert_eq!(json["monster_stages"]["blob"], 0);
        assert!(json["drink_log"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_partial_snapshot_uses_defaults() {
        let snapshot = Snapshot::from_json(r#"{"hydration_score": 250}"#).unwrap();
        assert_eq!(snapshot.version, SAVE_VERSION);
        assert_eq!(snapshot.state.hydration_score(), 250.0);
        assert_eq!(snapshot.state.selected_type(), MonsterType::Blob);
        assert!(snapshot.state.drink_log().is_empty());
    }

    #[test]
    fn test_selected_type_inserted_on_load() {
        let snapshot =
            Snapshot::from_json(r#"{"selected_type": "sprout", "monster_stages": {"blob": 2}}"#)
                .unwrap();
        assert_eq!(snapshot.state.stage(MonsterType::Sprout), Some(0));
        assert_eq!(snapshot.state.stage(MonsterType::Blob), Some(2));
    }

    #[test]
    fn test_version_mismatch() {
        let err = Snapshot::from_json(r#"{"version": 99}"#).unwrap_err();
        assert!(matches!(
            err,
            PersistError::VersionMismatch {
                expected: SAVE_VERSION,
                found: 99
            }
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Snapshot::from_json("not json at all"),
            Err(PersistError::Json(_))
        ));
        assert!(matches!(
            Snapshot::from_json(r#"{"selected_type": "dragon"}"#),
            Err(PersistError::Json(_))
        ));
    }
}
