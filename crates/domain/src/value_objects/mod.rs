//! Value objects - immutable types compared by value

mod ability_scores;
mod bonus_formula;
mod bonus_key;
mod class_identifier;
mod stat;

pub use ability_scores::{AbilityScores, DEFAULT_SCORE};
pub use bonus_formula::{BonusFormula, FormulaParseError, FormulaTerm};
pub use bonus_key::{BonusKey, BonusKind, FLAG_ROOT, MODULE_ID};
pub use class_identifier::ClassIdentifier;
pub use stat::Ability;
