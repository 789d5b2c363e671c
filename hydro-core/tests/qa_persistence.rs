//! QA tests for save/load and persistence functionality.
//!
//! These tests verify that game state is saved after every change and
//! restored on the next start, and that bad save files never stop the game.
//! Run with: `cargo test -p hydro-core --test qa_persistence -- --nocapture`

use hydro_core::{
    DrinkKind, EvolutionStore, GameState, LoadStatus, MonsterType, PersistError, Snapshot,
};
use std::fs;
use tempfile::TempDir;

// =============================================================================
// TEST 1: Basic save and load
// =============================================================================

#[test]
fn test_save_and_load_basic() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let save_path = temp_dir.path().join("test_save.json");

    let (mut store, _) = EvolutionStore::open(&save_path);
    store.record_drink(DrinkKind::Water, 180.0).unwrap();
    store.select_monster(MonsterType::Bubble).unwrap();
    store.record_drink(DrinkKind::Coffee, 250.0).unwrap();

    assert!(save_path.exists(), "Save file should exist after a drink");

    let (loaded, status) = EvolutionStore::open(&save_path);
    assert!(matches!(status, LoadStatus::Restored));
    assert_eq!(loaded.state(), store.state(), "state should round trip");
    assert_eq!(loaded.selected_type(), MonsterType::Bubble);
    assert_eq!(loaded.stage(MonsterType::Blob), Some(1));
    assert_eq!(loaded.state().drink_log().len(), 2);
}

// =============================================================================
// TEST 2: Drink timestamps survive a round trip
// =============================================================================

#[test]
fn test_timestamps_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let save_path = temp_dir.path().join("save.json");

    let (mut store, _) = EvolutionStore::open(&save_path);
    store.record_drink(DrinkKind::Soda, 330.0).unwrap();
    let written = store.state().drink_log()[0].timestamp;

    let (loaded, _) = EvolutionStore::open(&save_path);
    assert_eq!(loaded.state().drink_log()[0].timestamp, written);
}

// =============================================================================
// TEST 3: Missing file means a fresh game
// =============================================================================

#[test]
fn test_missing_save_gives_default_state() {
    let temp_dir = TempDir::new().unwrap();
    let (store, status) = EvolutionStore::open(temp_dir.path().join("nope.json"));

    assert!(matches!(status, LoadStatus::Missing));
    assert_eq!(store.state(), &GameState::default());
}

// =============================================================================
// TEST 4: Corrupt file means a fresh game plus an error
// =============================================================================

#[test]
fn test_corrupt_save_gives_default_state() {
    let temp_dir = TempDir::new().unwrap();
    let save_path = temp_dir.path().join("corrupt.json");
    fs::write(&save_path, "{ \"hydration_score\": 12, \"drink_log\": [ oops").unwrap();

    let (store, status) = EvolutionStore::open(&save_path);
    assert!(matches!(status, LoadStatus::Recovered(PersistError::Json(_))));
    assert_eq!(store.state(), &GameState::default());
}

#[test]
fn test_truncated_save_gives_default_state() {
    let temp_dir = TempDir::new().unwrap();
    let save_path = temp_dir.path().join("save.json");

    let (mut store, _) = EvolutionStore::open(&save_path);
    store.record_drink(DrinkKind::Water, 300.0).unwrap();

    let content = fs::read(&save_path).unwrap();
    fs::write(&save_path, &content[..content.len() / 2]).unwrap();

    let (store, status) = EvolutionStore::open(&save_path);
    assert!(matches!(status, LoadStatus::Recovered(_)));
    assert_eq!(store.hydration_score(), 0.0);
}

#[test]
fn test_newer_version_is_not_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let save_path = temp_dir.path().join("future.json");
    fs::write(&save_path, r#"{"version": 2, "hydration_score": 900}"#).unwrap();

    let (store, status) = EvolutionStore::open(&save_path);
    assert!(matches!(
        status,
        LoadStatus::Recovered(PersistError::VersionMismatch { found: 2, .. })
    ));
    assert_eq!(store.hydration_score(), 0.0);
}

// =============================================================================
// TEST 5: Partial files keep what they have
// =============================================================================

#[test]
fn test_partial_save_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let save_path = temp_dir.path().join("partial.json");
    fs::write(
        &save_path,
        r#"{"hydration_score": 320.5, "current_pet": "ignored", "selected_type": "ember"}"#,
    )
    .unwrap();

    let (store, status) = EvolutionStore::open(&save_path);
    assert!(matches!(status, LoadStatus::Restored));
    assert_eq!(store.hydration_score(), 320.5);
    assert_eq!(store.selected_type(), MonsterType::Ember);
    assert_eq!(store.stage(MonsterType::Ember), Some(0));
    assert!(store.state().drink_log().is_empty());
}

// =============================================================================
// TEST 6: The file on disk is the versioned snapshot
// =============================================================================

#[test]
fn test_snapshot_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let save_path = temp_dir.path().join("save.json");

    let (mut store, _) = EvolutionStore::open(&save_path);
    store.record_drink(DrinkKind::Water, 100.0).unwrap();

    let snapshot = Snapshot::load_json(&save_path).unwrap();
    assert_eq!(snapshot.version, hydro_core::persist::SAVE_VERSION);
    assert!(snapshot.saved_at.is_some());
    assert_eq!(&snapshot.state, store.state());

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&save_path).unwrap()).unwrap();
    assert_eq!(raw["drink_log"][0]["kind"], "water");
    assert_eq!(raw["monster_stages"]["blob"], 1);
}

// =============================================================================
// TEST 7: Fractional volumes reload bit for bit
// =============================================================================

#[test]
fn test_fractional_volumes_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let save_path = temp_dir.path().join("save.json");

    let (mut store, _) = EvolutionStore::open(&save_path);
    for i in 1..500 {
        let volume = 0.1 * f64::from(i) + 1.0 / 3.0;
        store.record_drink(DrinkKind::Coffee, volume).unwrap();
    }

    let (loaded, status) = EvolutionStore::open(&save_path);
    assert!(matches!(status, LoadStatus::Restored));
    assert_eq!(loaded.state(), store.state());
    assert_eq!(
        loaded.hydration_score().to_bits(),
        store.hydration_score().to_bits()
    );
}
