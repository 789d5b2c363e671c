//! Hydro Freaks game engine.
//!
//! This crate provides:
//! - The freak catalog and its ASCII art
//! - Drink logging with per-drink point multipliers
//! - The evolution rule that turns hydration score into freak stages
//! - Save file persistence that never takes the game down
//!
//! # Quick Start
//!
//! ```no_run
//! use hydro_core::{DrinkKind, EvolutionStore, GameConfig};
//!
//! let config = GameConfig::new().with_save_path("my_freaks.json");
//! let (mut store, _status) = EvolutionStore::from_config(&config);
//!
//! let receipt = store.record_drink(DrinkKind::Water, 250.0)?;
//! if receipt.evolved {
//!     println!("{}", store.selected_type().art(store.selected_stage()));
//! }
//! # Ok::<(), hydro_core::StoreError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod drink;
pub mod evolution;
pub mod persist;
pub mod state;
pub mod store;

// Primary public API
pub use catalog::{InvalidMonsterType, MonsterType, MAX_STAGE};
pub use config::{ConfigError, GameConfig};
pub use drink::{DrinkEntry, DrinkKind, RecentDrinks, UnknownDrink};
pub use evolution::THRESHOLDS;
pub use persist::{LoadStatus, Loaded, PersistError, Snapshot};
pub use state::GameState;
pub use store::{DrinkReceipt, EvolutionStore, StoreError};
