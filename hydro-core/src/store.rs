//! EvolutionStore - the primary public API for Hydro Freaks.
//!
//! The store owns the [`GameState`] and the path of its save file. Every
//! mutating operation writes the whole state back to disk. Save failures do
//! not stop play: they are logged and handed back to the caller as values.

use crate::catalog::{MonsterType, MAX_STAGE};
use crate::config::GameConfig;
use crate::drink::{DrinkEntry, DrinkKind, RecentDrinks};
use crate::persist::{self, LoadStatus, PersistError};
use crate::state::GameState;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from store operations. The state is unchanged when one is returned.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Volume must be a positive number of milliliters, got {0}")]
    InvalidVolume(f64),

    #[error(transparent)]
    UnknownDrink(#[from] crate::drink::UnknownDrink),

    #[error(transparent)]
    InvalidMonsterType(#[from] crate::catalog::InvalidMonsterType),
}

/// What happened when a drink was recorded.
#[derive(Debug)]
pub struct DrinkReceipt {
    /// Points the drink was worth.
    pub points: f64,
    /// Whether the selected freak's stage went up.
    pub evolved: bool,
    /// Stage of the selected freak after the drink.
    pub stage: u8,
    /// A freak hatched because the selected one reached its final stage.
    pub unlocked: Option<MonsterType>,
    /// Outcome of writing the save file.
    pub saved: Result<(), PersistError>,
}

/// The game state together with where it is saved.
pub struct EvolutionStore {
    state: GameState,
    save_path: PathBuf,
}

impl EvolutionStore {
    /// Open the save at `save_path`, or start fresh if it is missing or
    /// unusable.
    pub fn open(save_path: impl Into<PathBuf>) -> (Self, LoadStatus) {
        let save_path = save_path.into();
        let loaded = persist::load(&save_path);
        match &loaded.status {
            LoadStatus::Missing => {
                tracing::info!(path = %save_path.display(), "no save found, starting a new game")
            }
            LoadStatus::Restored => tracing::info!(
                path = %save_path.display(),
                score = loaded.state.hydration_score(),
                "save loaded"
            ),
            LoadStatus::Recovered(_) => {}
        }
        (
            Self {
                state: loaded.state,
                save_path,
            },
            loaded.status,
        )
    }

    /// Open the save named in `config`.
    pub fn from_config(config: &GameConfig) -> (Self, LoadStatus) {
        Self::open(&config.save_path)
    }

    /// Wrap an existing state without touching the disk.
    pub fn with_state(state: GameState, save_path: impl Into<PathBuf>) -> Self {
        Self {
            state,
            save_path: save_path.into(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Record a drink, evolve the selected freak if the score allows, and
    /// save.
    ///
    /// A volume that is not a positive finite number is rejected and nothing
    /// changes.
    pub fn record_drink(&mut self, kind: DrinkKind, volume_ml: f64) -> Result<DrinkReceipt, StoreError> {
        if !volume_ml.is_finite() || volume_ml <= 0.0 {
            return Err(StoreError::InvalidVolume(volume_ml));
        }

        let entry = DrinkEntry::new(kind, volume_ml);
        let points = entry.points;
        self.state.log_drink(entry);
        tracing::debug!(
            drink = %kind,
            volume_ml,
            points,
            score = self.state.hydration_score(),
            "drink recorded"
        );

        let evolved = self.evaluate_evolution();
        let stage = self.state.selected_stage();
        // Hatch the next egg once every hatched freak is fully grown
        let unlocked = if stage >= MAX_STAGE && self.state.all_hatched_maxed() {
            let next = self.state.unlock_next();
            if let Some(monster) = next {
                tracing::info!(monster = monster.id(), "new freak hatched");
            }
            next
        } else {
            None
        };

        Ok(DrinkReceipt {
            points,
            evolved,
            stage,
            unlocked,
            saved: self.save(),
        })
    }

    /// Record a drink named by text, such as `"water"`.
    pub fn record_drink_named(&mut self, kind: &str, volume_ml: f64) -> Result<DrinkReceipt, StoreError> {
        let kind: DrinkKind = kind.parse()?;
        self.record_drink(kind, volume_ml)
    }

    /// Evolve the selected freak if the score has passed a new threshold.
    ///
    /// Returns `true` only when the stage went up. Does not save.
    pub fn evaluate_evolution(&mut self) -> bool {
        let evolved = self.state.evaluate_evolution();
        if evolved {
            tracing::info!(
                monster = self.state.selected_type().id(),
                stage = self.state.selected_stage(),
                "freak evolved"
            );
        }
        evolved
    }

    /// Make `monster` the active freak and save.
    ///
    /// A freak that has never been selected hatches at stage 0. The score is
    /// not touched and no stage is granted until the next drink.
    pub fn select_monster(&mut self, monster: MonsterType) -> Result<(), PersistError> {
        self.state.select(monster);
        tracing::debug!(monster = monster.id(), "freak selected");
        self.save()
    }

    /// Select a freak by its catalog id, such as `"sprout"`.
    ///
    /// The outer error is an unknown id; the inner result is the save outcome.
    pub fn select_monster_named(&mut self, id: &str) -> Result<Result<(), PersistError>, StoreError> {
        let monster: MonsterType = id.parse()?;
        Ok(self.select_monster(monster))
    }

    /// Write the state to the save file.
    ///
    /// Failures are logged and returned; the in-memory state stays as is.
    pub fn save(&self) -> Result<(), PersistError> {
        let result = persist::save(&self.state, &self.save_path);
        match &result {
            Ok(()) => tracing::debug!(path = %self.save_path.display(), "game saved"),
            Err(e) => {
                tracing::warn!(path = %self.save_path.display(), error = %e, "save failed")
            }
        }
        result
    }

    pub fn hydration_score(&self) -> f64 {
        self.state.hydration_score()
    }

    pub fn selected_type(&self) -> MonsterType {
        self.state.selected_type()
    }

    pub fn selected_stage(&self) -> u8 {
        self.state.selected_stage()
    }

    pub fn stage(&self, monster: MonsterType) -> Option<u8> {
        self.state.stage(monster)
    }

    pub fn is_unlocked(&self, monster: MonsterType) -> bool {
        self.state.is_unlocked(monster)
    }

    pub fn collection(&self) -> Vec<(MonsterType, u8)> {
        self.state.collection()
    }

    pub fn collected_count(&self) -> usize {
        self.state.collected_count()
    }

    pub fn points_to_next(&self) -> Option<f64> {
        self.state.points_to_next()
    }

    pub fn recent_drinks(&self, limit: usize) -> RecentDrinks<'_> {
        self.state.recent_drinks(limit)
    }
}
