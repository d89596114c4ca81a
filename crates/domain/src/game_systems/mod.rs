//! Game system implementations.
//!
//! Scoped bonuses sit on top of the base spellcasting numbers a game system
//! computes. Only D&D 5th Edition (`dnd5e`) is implemented.

mod dnd5e;
mod traits;

pub use dnd5e::Dnd5eSystem;

// Core traits
pub use traits::{CalculationEngine, GameSystem, SpellcastingSystem};
