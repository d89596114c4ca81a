//! Bonus keys - the contract between bonus-granting effects and the engine.
//!
//! An effect grants a class-scoped bonus by carrying a change whose key is
//! `flags.dnd5e-scoped-bonuses.class.spell.<kind>.<class>`, for example
//! `flags.dnd5e-scoped-bonuses.class.spell.dc.wizard`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ClassIdentifier;
use crate::DomainError;

/// Namespace the bonus keys live under.
pub const MODULE_ID: &str = "dnd5e-scoped-bonuses";

/// Common prefix of every bonus key.
pub const FLAG_ROOT: &str = "flags.dnd5e-scoped-bonuses.class.spell";

/// Which spellcasting number a bonus targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BonusKind {
    /// Spell save DC
    Dc,
    /// Spell attack modifier
    Attack,
}

impl BonusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dc => "dc",
            Self::Attack => "attack",
        }
    }

    pub fn all() -> [BonusKind; 2] {
        [Self::Dc, Self::Attack]
    }
}

impl fmt::Display for BonusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BonusKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dc" => Ok(Self::Dc),
            "attack" => Ok(Self::Attack),
            _ => Err(DomainError::parse(format!("Unknown bonus kind: {}", s))),
        }
    }
}

/// A `(kind, class)` bonus key with its dotted path precomputed.
///
/// The class part is lower-cased on construction; nothing else is normalised,
/// so matching against effect changes is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BonusKey {
    kind: BonusKind,
    class: String,
    path: String,
}

impl BonusKey {
    pub fn new(kind: BonusKind, class: &str) -> Self {
        let class = class.to_lowercase();
        let path = format!("{}.{}.{}", FLAG_ROOT, kind.as_str(), class);
        Self { kind, class, path }
    }

    /// Key for one of the canonical classes.
    pub fn for_class(kind: BonusKind, class: ClassIdentifier) -> Self {
        Self::new(kind, class.as_str())
    }

    pub fn kind(&self) -> BonusKind {
        self.kind
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Dotted path form, as written in effect changes.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Whether an effect change key targets this bonus.
    pub fn matches(&self, change_key: &str) -> bool {
        self.path == change_key
    }
}

impl fmt::Display for BonusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl FromStr for BonusKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(FLAG_ROOT)
            .and_then(|rest| rest.strip_prefix('.'))
            .ok_or_else(|| DomainError::foreign_key(s))?;

        let (kind, class) = rest
            .split_once('.')
            .ok_or_else(|| DomainError::parse(format!("Bonus key has no class: {}", s)))?;

        if class.is_empty() || class.contains('.') {
            return Err(DomainError::parse(format!("Invalid class in bonus key: {}", s)));
        }
        if class != class.to_lowercase() {
            return Err(DomainError::validation(format!(
                "Class in bonus key must be lower-case: {}",
                s
            )));
        }

        Ok(Self::new(kind.parse()?, class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_dotted_path() {
        let key = BonusKey::new(BonusKind::Dc, "wizard");
        assert_eq!(key.as_str(), "flags.dnd5e-scoped-bonuses.class.spell.dc.wizard");
        assert_eq!(key.to_string(), key.as_str());
    }

    #[test]
    fn lower_cases_the_class() {
        let key = BonusKey::new(BonusKind::Attack, "Warlock");
        assert_eq!(key.class(), "warlock");
        assert!(key.matches("flags.dnd5e-scoped-bonuses.class.spell.attack.warlock"));
    }

    #[test]
    fn matching_is_exact() {
        let key = BonusKey::for_class(BonusKind::Dc, ClassIdentifier::Wizard);
        assert!(!key.matches("flags.dnd5e-scoped-bonuses.class.spell.dc"));
        assert!(!key.matches("flags.dnd5e-scoped-bonuses.class.spell.dc.wizard.extra"));
        assert!(!key.matches("flags.dnd5e-scoped-bonuses.class.spell.dc.Wizard"));
    }

    #[test]
    fn parses_from_path() {
        let key: BonusKey = "flags.dnd5e-scoped-bonuses.class.spell.attack.cleric"
            .parse()
            .unwrap();
        assert_eq!(key.kind(), BonusKind::Attack);
        assert_eq!(key.class(), "cleric");
    }

    #[test]
    fn rejects_foreign_and_malformed_keys() {
        assert!(matches!(
            "system.bonuses.spell.dc".parse::<BonusKey>(),
            Err(DomainError::ForeignKey(_))
        ));
        assert!(matches!(
            "flags.dnd5e-scoped-bonuses.class.spell.save.wizard".parse::<BonusKey>(),
            Err(DomainError::Parse(_))
        ));
        assert!(matches!(
            "flags.dnd5e-scoped-bonuses.class.spell.dc".parse::<BonusKey>(),
            Err(DomainError::Parse(_))
        ));
        assert!(matches!(
            "flags.dnd5e-scoped-bonuses.class.spell.dc.Wizard".parse::<BonusKey>(),
            Err(DomainError::Validation(_))
        ));
    }
}
