//! TUI widgets for Hydro Freaks

pub mod input;
pub mod monster;
pub mod stats;

pub use input::InputWidget;
pub use monster::MonsterWidget;
pub use stats::StatsWidget;
