//! Canonical D&D 5e class identifiers.
//!
//! Bonus keys are matched on plain lower-cased strings, so homebrew classes
//! still resolve. This enum covers the classes that get published keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassIdentifier {
    Artificer,
    Barbarian,
    Bard,
    Cleric,
    Druid,
    Fighter,
    Monk,
    Paladin,
    Ranger,
    Rogue,
    Sorcerer,
    Warlock,
    Wizard,
}

impl ClassIdentifier {
    /// Lower-cased identifier as it appears in class items and bonus keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Artificer => "artificer",
            Self::Barbarian => "barbarian",
            Self::Bard => "bard",
            Self::Cleric => "cleric",
            Self::Druid => "druid",
            Self::Fighter => "fighter",
            Self::Monk => "monk",
            Self::Paladin => "paladin",
            Self::Ranger => "ranger",
            Self::Rogue => "rogue",
            Self::Sorcerer => "sorcerer",
            Self::Warlock => "warlock",
            Self::Wizard => "wizard",
        }
    }

    /// Capitalised label (e.g., "Wizard").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Artificer => "Artificer",
            Self::Barbarian => "Barbarian",
            Self::Bard => "Bard",
            Self::Cleric => "Cleric",
            Self::Druid => "Druid",
            Self::Fighter => "Fighter",
            Self::Monk => "Monk",
            Self::Paladin => "Paladin",
            Self::Ranger => "Ranger",
            Self::Rogue => "Rogue",
            Self::Sorcerer => "Sorcerer",
            Self::Warlock => "Warlock",
            Self::Wizard => "Wizard",
        }
    }

    /// All canonical classes in alphabetical order.
    pub fn all() -> [ClassIdentifier; 13] {
        [
            Self::Artificer,
            Self::Barbarian,
            Self::Bard,
            Self::Cleric,
            Self::Druid,
            Self::Fighter,
            Self::Monk,
            Self::Paladin,
            Self::Ranger,
            Self::Rogue,
            Self::Sorcerer,
            Self::Warlock,
            Self::Wizard,
        ]
    }
}

impl fmt::Display for ClassIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClassIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::all()
            .into_iter()
            .find(|class| class.as_str() == lowered)
            .ok_or_else(|| DomainError::parse(format!("Unknown class identifier: {}", s)))
    }
}
