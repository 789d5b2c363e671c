//! Text shared by the TUI and headless front ends.

use chrono::Local;
use hydro_core::{DrinkEntry, EvolutionStore, MonsterType, MAX_STAGE};

pub const TITLE: &str = "H Y D R O  F R E A K S";

/// "Evolution stage: 2/3", with the egg called out at stage 0.
pub fn stage_line(stage: u8) -> String {
    if stage == 0 {
        format!("Evolution stage: 0/{MAX_STAGE} (egg)")
    } else {
        format!("Evolution stage: {stage}/{MAX_STAGE}")
    }
}

pub fn monster_line(monster: MonsterType) -> String {
    format!("Monster type: {monster}")
}

pub fn score_line(store: &EvolutionStore) -> String {
    format!("Total hydration score: {:.1}", store.hydration_score())
}

pub fn collected_line(store: &EvolutionStore) -> String {
    format!(
        "Freaks collected: {}/{}",
        store.collected_count(),
        MonsterType::ALL.len()
    )
}

/// Progress toward the selected freak's next stage.
pub fn next_evolution_line(store: &EvolutionStore) -> String {
    match store.points_to_next() {
        None => "All evolutions complete for current monster!".to_string(),
        Some(p) if p <= 0.0 => "Ready to evolve! Log any drink.".to_string(),
        Some(p) => format!("Points to next evolution: {p:.1}"),
    }
}

/// "Sprout: Evolution stage 2/3"
pub fn collection_line(monster: MonsterType, stage: u8) -> String {
    format!("{monster}: Evolution stage {stage}/{MAX_STAGE}")
}

/// One row of the selection menu, numbered from 1.
pub fn select_line(store: &EvolutionStore, monster: MonsterType) -> String {
    let status = if store.is_unlocked(monster) {
        "Unlocked"
    } else {
        "Locked"
    };
    format!("{}. {monster} [{status}]", monster.index() + 1)
}

/// One row of the drink history, numbered from 1.
pub fn history_line(number: usize, entry: &DrinkEntry) -> String {
    let when = entry.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M");
    format!(
        "{number}. {when}: {}ml of {} (+{:.1} pts)",
        entry.volume_ml, entry.kind, entry.points
    )
}

pub fn hidden_line(hidden: usize) -> String {
    format!("...and {hidden} more entries.")
}

/// Menu label for a drink, such as "1. Water (1.0x points)".
pub fn drink_option_line(number: usize, kind: hydro_core::DrinkKind) -> String {
    format!("{number}. {} ({:.1}x points)", kind.name(), kind.multiplier())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydro_core::{DrinkKind, GameState};

    #[test]
    fn test_stage_line() {
        assert_eq!(stage_line(0), "Evolution stage: 0/3 (egg)");
        assert_eq!(stage_line(2), "Evolution stage: 2/3");
    }

    #[test]
    fn test_next_evolution_line() {
        let mut store = EvolutionStore::with_state(GameState::new(), "unused.json");
        assert_eq!(next_evolution_line(&store), "Points to next evolution: 100.0");

        let mut state = GameState::new();
        state.log_drink(DrinkEntry::new(DrinkKind::Water, 600.0));
        state.select(MonsterType::Ember);
        store = EvolutionStore::with_state(state, "unused.json");
        assert_eq!(next_evolution_line(&store), "Ready to evolve! Log any drink.");

        let mut state = GameState::new();
        state.log_drink(DrinkEntry::new(DrinkKind::Water, 600.0));
        state.evaluate_evolution();
        store = EvolutionStore::with_state(state, "unused.json");
        assert_eq!(
            next_evolution_line(&store),
            "All evolutions complete for current monster!"
        );
    }

    #[test]
    fn test_select_line() {
        let store = EvolutionStore::with_state(GameState::new(), "unused.json");
        assert_eq!(select_line(&store, MonsterType::Blob), "1. Blob [Unlocked]");
        assert_eq!(select_line(&store, MonsterType::Ember), "4. Ember [Locked]");
    }

    #[test]
    fn test_history_line() {
        let entry = DrinkEntry::new(DrinkKind::Coffee, 200.0);
        let line = history_line(1, &entry);
        assert!(line.starts_with("1. "));
        assert!(line.ends_with(": 200ml of coffee (+60.0 pts)"));
    }

    #[test]
    fn test_drink_option_line() {
        assert_eq!(drink_option_line(2, DrinkKind::Soda), "2. Soda (0.5x points)");
    }
}
