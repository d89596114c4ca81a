//! Game system traits for TTRPG-specific mechanics.
//!
//! These traits define the interface for the system-specific numbers the host
//! computes before scoped bonuses are layered on top.

use crate::value_objects::{Ability, AbilityScores};

/// Core trait all game systems must implement.
///
/// This trait provides system identification and access to the calculation engine.
pub trait GameSystem: Send + Sync {
    /// Unique identifier for this game system (e.g., "dnd5e").
    fn system_id(&self) -> &str;

    /// Human-readable display name (e.g., "D&D 5th Edition").
    fn display_name(&self) -> &str;

    /// Get the calculation engine for this system.
    fn calculation_engine(&self) -> &dyn CalculationEngine;

    /// Optional: Get the spellcasting system if this system has spellcasting.
    fn spellcasting_system(&self) -> Option<&dyn SpellcastingSystem> {
        None
    }
}

/// Calculation rules that vary per game system.
pub trait CalculationEngine: Send + Sync {
    /// Calculate ability modifier from score.
    ///
    /// For D&D-like systems: floor((score - 10) / 2)
    fn ability_modifier(&self, score: i32) -> i32;

    /// Calculate proficiency bonus from character level.
    ///
    /// For D&D 5e: ((level - 1) / 4) + 2
    fn proficiency_bonus(&self, level: u8) -> i32;

    /// Calculate spell save DC.
    ///
    /// For D&D 5e: 8 + proficiency + casting ability modifier
    fn spell_save_dc(&self, abilities: &AbilityScores, casting: Ability, level: u8) -> i32;

    /// Calculate spell attack bonus.
    ///
    /// For D&D 5e: proficiency + casting ability modifier
    fn spell_attack_bonus(&self, abilities: &AbilityScores, casting: Ability, level: u8) -> i32;
}

/// For systems with spellcasting.
pub trait SpellcastingSystem: Send + Sync {
    /// Get the default spellcasting ability for a class identifier.
    fn spellcasting_ability(&self, class: &str) -> Option<Ability>;
}
