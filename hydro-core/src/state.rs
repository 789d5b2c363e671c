//! The game state and its transition rules.
//!
//! [`GameState`] holds everything that is saved: the hydration score, the
//! stage of every hatched freak, the selected freak and the drink log. The
//! methods here are pure state transitions; saving is handled by
//! [`crate::store::EvolutionStore`].

use crate::catalog::{MonsterType, MAX_STAGE};
use crate::drink::{self, DrinkEntry, RecentDrinks};
use crate::evolution;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete persisted game state.
///
/// Missing fields in a save file fall back to their defaults one by one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    hydration_score: f64,
    monster_stages: BTreeMap<MonsterType, u8>,
    selected_type: MonsterType,
    drink_log: Vec<DrinkEntry>,
}

impl Default for GameState {
    fn default() -> Self {
        let selected_type = MonsterType::default();
        Self {
            hydration_score: 0.0,
            monster_stages: BTreeMap::from([(selected_type, 0)]),
            selected_type,
            drink_log: Vec::new(),
        }
    }
}

impl GameState {
    /// A fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Repair a state read from disk so the invariants hold.
    ///
    /// The selected freak is hatched at stage 0 if the map lacks it, stages
    /// past [`MAX_STAGE`] are clamped, and a negative or non-finite score is
    /// reset to zero.
    pub fn normalize(&mut self) {
        self.monster_stages.entry(self.selected_type).or_insert(0);
        for stage in self.monster_stages.values_mut() {
            *stage = (*stage).min(MAX_STAGE);
        }
        if !self.hydration_score.is_finite() || self.hydration_score < 0.0 {
            self.hydration_score = 0.0;
        }
    }

    pub fn hydration_score(&self) -> f64 {
        self.hydration_score
    }

    pub fn selected_type(&self) -> MonsterType {
        self.selected_type
    }

    /// Stage of every hatched freak.
    pub fn monster_stages(&self) -> &BTreeMap<MonsterType, u8> {
        &self.monster_stages
    }

    /// Full drink log, oldest first.
    pub fn drink_log(&self) -> &[DrinkEntry] {
        &self.drink_log
    }

    /// Stage of `monster`, or `None` if it has not hatched.
    pub fn stage(&self, monster: MonsterType) -> Option<u8> {
        self.monster_stages.get(&monster).copied()
    }

    pub fn selected_stage(&self) -> u8 {
        self.stage(self.selected_type).unwrap_or(0)
    }

    /// Whether `monster` can be picked as the active freak.
    pub fn is_unlocked(&self, monster: MonsterType) -> bool {
        self.monster_stages.contains_key(&monster)
    }

    /// Add a drink to the log and its points to the score.
    pub fn log_drink(&mut self, entry: DrinkEntry) {
        self.hydration_score += entry.points;
        self.drink_log.push(entry);
    }

    /// Raise the selected freak's stage if the score allows it.
    ///
    /// Returns `true` only when the stage went up. Calling this again at the
    /// same score returns `false`.
    pub fn evaluate_evolution(&mut self) -> bool {
        let stage = self
            .monster_stages
            .entry(self.selected_type)
            .or_insert(0);
        match evolution::target_stage(self.hydration_score, *stage) {
            Some(target) => {
                *stage = target;
                true
            }
            None => false,
        }
    }

    /// Make `monster` the active freak, hatching it at stage 0 if needed.
    ///
    /// Selection never touches the score or grants a stage.
    pub fn select(&mut self, monster: MonsterType) {
        self.selected_type = monster;
        self.monster_stages.entry(monster).or_insert(0);
    }

    /// Whether every hatched freak has reached [`MAX_STAGE`].
    pub fn all_hatched_maxed(&self) -> bool {
        self.monster_stages.values().all(|&s| s >= MAX_STAGE)
    }

    /// Hatch the first catalog freak that is not in the map yet.
    ///
    /// Returns the freak that hatched, or `None` if every freak already has.
    pub fn unlock_next(&mut self) -> Option<MonsterType> {
        let next = MonsterType::ALL
            .into_iter()
            .find(|m| !self.monster_stages.contains_key(m))?;
        self.monster_stages.insert(next, 0);
        Some(next)
    }

    /// Hatched freaks and their stages, in catalog order.
    pub fn collection(&self) -> Vec<(MonsterType, u8)> {
        MonsterType::ALL
            .into_iter()
            .filter_map(|m| self.stage(m).map(|stage| (m, stage)))
            .collect()
    }

    /// Freaks that have evolved at least once.
    pub fn collected_count(&self) -> usize {
        self.monster_stages.values().filter(|&&s| s > 0).count()
    }

    /// Score at which the selected freak next evolves.
    pub fn next_threshold(&self) -> Option<f64> {
        evolution::next_threshold(self.selected_stage())
    }

    /// Points still needed before the selected freak can evolve.
    ///
    /// Zero means the next recorded drink will evolve it. `None` means the
    /// freak is fully evolved.
    pub fn points_to_next(&self) -> Option<f64> {
        self.next_threshold()
            .map(|t| (t - self.hydration_score).max(0.0))
    }

    pub fn is_fully_evolved(&self) -> bool {
        self.selected_stage() >= MAX_STAGE
    }

    /// The newest `limit` drinks, newest first.
    pub fn recent_drinks(&self, limit: usize) -> RecentDrinks<'_> {
        drink::recent(&self.drink_log, limit)
    }
}
