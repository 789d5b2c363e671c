//! The freak catalog: every monster type and its art for each stage.
//!
//! The catalog is static data. Stage 0 is the shared egg; stages 1 through
//! [`MAX_STAGE`] have art per type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Highest evolution stage a freak can reach.
pub const MAX_STAGE: u8 = 3;

/// Error returned when text does not name a catalog monster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid monster type: {0}")]
pub struct InvalidMonsterType(pub String);

/// A kind of freak the player can raise.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum MonsterType {
    #[default]
    Blob,
    Sprout,
    Bubble,
    Ember,
}

impl MonsterType {
    /// All monster types in catalog order.
    pub const ALL: [MonsterType; 4] = [
        MonsterType::Blob,
        MonsterType::Sprout,
        MonsterType::Bubble,
        MonsterType::Ember,
    ];

    /// Stable lowercase identifier used in save files.
    pub fn id(&self) -> &'static str {
        match self {
            MonsterType::Blob => "blob",
            MonsterType::Sprout => "sprout",
            MonsterType::Bubble => "bubble",
            MonsterType::Ember => "ember",
        }
    }

    /// Display name for menus.
    pub fn name(&self) -> &'static str {
        match self {
            MonsterType::Blob => "Blob",
            MonsterType::Sprout => "Sprout",
            MonsterType::Bubble => "Bubble",
            MonsterType::Ember => "Ember",
        }
    }

    /// Position in the catalog, starting at zero.
    pub fn index(&self) -> usize {
        match self {
            MonsterType::Blob => 0,
            MonsterType::Sprout => 1,
            MonsterType::Bubble => 2,
            MonsterType::Ember => 3,
        }
    }

    /// Look up a monster by its 1-based menu number.
    pub fn from_menu_number(number: usize) -> Option<MonsterType> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Art for this monster at the given stage.
    pub fn art(&self, stage: u8) -> &'static str {
        art(*self, stage)
    }
}

impl fmt::Display for MonsterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for MonsterType {
    type Err = InvalidMonsterType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        MonsterType::ALL
            .iter()
            .find(|m| m.id().eq_ignore_ascii_case(needle))
            .copied()
            .ok_or_else(|| InvalidMonsterType(s.to_string()))
    }
}

const EGG: &str = r"
      .-.
     /   \
    |  ?  |
     \___/
";

const BLOB_ART: [&str; 3] = [
    r"
     .---.
    ( o o )
     '---'
",
    r"
    .-----.
   (  o o  )
   (   ~   )
    '-----'
",
    r"
   .-------.
  ( \ O O / )
  (    w    )
  (  \___/  )
   '-------'
",
];

const SPROUT_ART: [&str; 3] = [
    r"
      \|/
     (o.o)
      |_|
",
    r"
     \\|//
     (o o)
    --( )--
      | |
",
    r"
    \\\|///
    ( O O )
  --(  v  )--
    /|   |\
   /_|___|_\
",
];

const BUBBLE_ART: [&str; 3] = [
    r"
      o
     ( )
    (o o)
",
    r"
     o  O
    ( oo )
   ( o  o )
    (____)
",
    r"
    O  o  O
   ( o  O  )
  ( (O) (O) )
  (   ___   )
   (_______)
",
];

const EMBER_ART: [&str; 3] = [
    r"
      (
     ( )
    (o.o)
",
    r"
     ( ) )
    ( (o o)
     ) ^^ (
    (_____)
",
    r"
   ) (  ) (
  ( )/\ /\( )
  (  O   O  )
   \  VVV  /
    \_____/
",
];

/// Art for a monster at a stage. Stage 0 is the shared egg; stages above
/// [`MAX_STAGE`] show the final form.
pub fn art(monster: MonsterType, stage: u8) -> &'static str {
    if stage == 0 {
        return EGG;
    }
    let table = match monster {
        MonsterType::Blob => &BLOB_ART,
        MonsterType::Sprout => &SPROUT_ART,
        MonsterType::Bubble => &BUBBLE_ART,
        MonsterType::Ember => &EMBER_ART,
    };
    let idx = usize::from(stage.min(MAX_STAGE)) - 1;
    table[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_monster_type() {
        assert_eq!("blob".parse::<MonsterType>().unwrap(), MonsterType::Blob);
        assert_eq!(" Ember ".parse::<MonsterType>().unwrap(), MonsterType::Ember);
        assert_eq!(
            "dragon".parse::<MonsterType>(),
            Err(InvalidMonsterType("dragon".to_string()))
        );
    }

    #[test]
    fn test_id_roundtrip() {
        for monster in MonsterType::ALL {
            assert_eq!(monster.id().parse::<MonsterType>().unwrap(), monster);
        }
    }

    #[test]
    fn test_menu_numbers() {
        assert_eq!(MonsterType::from_menu_number(1), Some(MonsterType::Blob));
        assert_eq!(MonsterType::from_menu_number(4), Some(MonsterType::Ember));
        assert_eq!(MonsterType::from_menu_number(0), None);
        assert_eq!(MonsterType::from_menu_number(5), None);
    }

    #[test]
    fn test_every_stage_has_art() {
        for monster in MonsterType::ALL {
            for stage in 0..=MAX_STAGE {
                assert!(!art(monster, stage).trim().is_empty());
            }
        }
    }

    #[test]
    fn test_stage_zero_is_egg() {
        assert_eq!(art(MonsterType::Blob, 0), art(MonsterType::Ember, 0));
        assert_ne!(art(MonsterType::Blob, 1), art(MonsterType::Blob, 0));
    }

    #[test]
    fn test_stage_past_max_shows_final_form() {
        assert_eq!(art(MonsterType::Sprout, 9), art(MonsterType::Sprout, MAX_STAGE));
    }

    #[test]
    fn test_serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&MonsterType::Bubble).unwrap();
        assert_eq!(json, "\"bubble\"");
    }
}
