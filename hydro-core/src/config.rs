//! Game configuration.
//!
//! Defaults can be overridden by environment variables (a `.env` file is
//! honored by the binary) and then by command-line flags.

use std::path::PathBuf;
use thiserror::Error;

/// Default save file name, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "hydro_freaks.json";

/// Default log file used while the TUI owns the terminal.
pub const DEFAULT_LOG_PATH: &str = "hydro_freaks.log";

/// How many drinks the history view shows.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Errors from reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Where the snapshot is saved.
    pub save_path: PathBuf,

    /// Where logs go in TUI mode.
    pub log_path: PathBuf,

    /// Drinks shown in the history view.
    pub history_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from the process environment.
    ///
    /// - `HYDRO_FREAKS_SAVE`: save file path
    /// - `HYDRO_FREAKS_LOG`: log file path
    /// - `HYDRO_FREAKS_HISTORY`: number of drinks in the history view
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Used by [`GameConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("HYDRO_FREAKS_SAVE").filter(|p| !p.is_empty()) {
            config.save_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("HYDRO_FREAKS_LOG").filter(|p| !p.is_empty()) {
            config.log_path = PathBuf::from(path);
        }
        if let Some(value) = lookup("HYDRO_FREAKS_HISTORY") {
            let parsed = value.trim().parse::<usize>().ok().filter(|&n| n > 0);
            config.history_limit = parsed.ok_or(ConfigError::InvalidValue {
                var: "HYDRO_FREAKS_HISTORY",
                value,
            })?;
        }

        Ok(config)
    }

    /// Set the save file path.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Set the TUI log file path.
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Set how many drinks the history view shows.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.save_path, PathBuf::from("hydro_freaks.json"));
    }

    #[test]
    fn test_env_overrides() {
        let config = GameConfig::from_lookup(lookup(&[
            ("HYDRO_FREAKS_SAVE", "/tmp/freaks.json"),
            ("HYDRO_FREAKS_HISTORY", "5"),
        ]))
        .unwrap();
        assert_eq!(config.save_path, PathBuf::from("/tmp/freaks.json"));
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.log_path, PathBuf::from(DEFAULT_LOG_PATH));
    }

    #[test]
    fn test_invalid_history_limit() {
        let err = GameConfig::from_lookup(lookup(&[("HYDRO_FREAKS_HISTORY", "lots")])).unwrap_err();
        assert!(err.to_string().contains("HYDRO_FREAKS_HISTORY"));
        assert!(GameConfig::from_lookup(lookup(&[("HYDRO_FREAKS_HISTORY", "0")])).is_err());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_save_path("a.json")
            .with_log_path("a.log")
            .with_history_limit(3);
        assert_eq!(config.save_path, PathBuf::from("a.json"));
        assert_eq!(config.log_path, PathBuf::from("a.log"));
        assert_eq!(config.history_limit, 3);
    }
}
