//! Drinks and the drink log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when text does not name a known drink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown drink: {0}")]
pub struct UnknownDrink(pub String);

/// A kind of beverage the player can log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkKind {
    Water,
    Soda,
    Coffee,
}

impl DrinkKind {
    /// All drink kinds in menu order.
    pub const ALL: [DrinkKind; 3] = [DrinkKind::Water, DrinkKind::Soda, DrinkKind::Coffee];

    /// Points awarded per milliliter.
    pub fn multiplier(&self) -> f64 {
        match self {
            DrinkKind::Water => 1.0,
            DrinkKind::Soda => 0.5,
            DrinkKind::Coffee => 0.3,
        }
    }

    /// Points awarded for drinking `volume_ml` of this.
    pub fn points_for(&self, volume_ml: f64) -> f64 {
        volume_ml * self.multiplier()
    }

    pub fn id(&self) -> &'static str {
        match self {
            DrinkKind::Water => "water",
            DrinkKind::Soda => "soda",
            DrinkKind::Coffee => "coffee",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DrinkKind::Water => "Water",
            DrinkKind::Soda => "Soda",
            DrinkKind::Coffee => "Coffee",
        }
    }

    /// Look up a drink by its 1-based menu number.
    pub fn from_menu_number(number: usize) -> Option<DrinkKind> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }
}

impl fmt::Display for DrinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for DrinkKind {
    type Err = UnknownDrink;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        DrinkKind::ALL
            .iter()
            .find(|d| d.id().eq_ignore_ascii_case(needle))
            .copied()
            .ok_or_else(|| UnknownDrink(s.to_string()))
    }
}

/// One logged drink. Entries are never modified after they are appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkEntry {
    pub kind: DrinkKind,
    pub volume_ml: f64,
    pub points: f64,
    pub timestamp: DateTime<Utc>,
}

impl DrinkEntry {
    /// Create an entry stamped with the current time.
    pub fn new(kind: DrinkKind, volume_ml: f64) -> Self {
        Self::at(kind, volume_ml, Utc::now())
    }

    /// Create an entry with an explicit timestamp.
    pub fn at(kind: DrinkKind, volume_ml: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            volume_ml,
            points: kind.points_for(volume_ml),
            timestamp,
        }
    }
}

/// The most recent slice of the drink log, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentDrinks<'a> {
    pub entries: Vec<&'a DrinkEntry>,
    /// Older entries not included in `entries`.
    pub hidden: usize,
}

/// Take up to `limit` entries from the end of `log`, newest first.
pub fn recent(log: &[DrinkEntry], limit: usize) -> RecentDrinks<'_> {
    let hidden = log.len().saturating_sub(limit);
    RecentDrinks {
        entries: log[hidden..].iter().rev().collect(),
        hidden,
    }
}
