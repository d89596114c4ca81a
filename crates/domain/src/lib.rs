extern crate self as scoped_bonuses_domain;

pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    ActiveEffect, Activity, ActivityData, ActivityLabels, ActivitySource, Actor, ActorType,
    AttackData, ChangeValue, ClassSpellcasting, DcCalculation, DcSource, EffectChange, Item,
    ItemSystem, ItemType, RollData, SaveData, SaveDc,
};

pub use error::DomainError;

// Re-export game system traits and types
pub use game_systems::{CalculationEngine, Dnd5eSystem, GameSystem, SpellcastingSystem};

// Re-export ID types
pub use ids::{ActivityId, ActorId, EffectId, ItemId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    Ability, AbilityScores, BonusFormula, BonusKey, BonusKind, ClassIdentifier,
    FormulaParseError, FormulaTerm, FLAG_ROOT, MODULE_ID,
};
