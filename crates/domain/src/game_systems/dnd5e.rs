//! D&D 5th Edition game system implementation.
//!
//! Implements the base spellcasting numbers for D&D 5e.

use super::traits::{CalculationEngine, GameSystem, SpellcastingSystem};
use crate::value_objects::{Ability, AbilityScores, ClassIdentifier};

/// D&D 5th Edition game system.
pub struct Dnd5eSystem;

impl Default for Dnd5eSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Dnd5eSystem {
    /// Create a new D&D 5e system instance.
    pub fn new() -> Self {
        Self
    }
}

impl GameSystem for Dnd5eSystem {
    fn system_id(&self) -> &str {
        "dnd5e"
    }

    fn display_name(&self) -> &str {
        "D&D 5th Edition"
    }

    fn calculation_engine(&self) -> &dyn CalculationEngine {
        self
    }

    fn spellcasting_system(&self) -> Option<&dyn SpellcastingSystem> {
        Some(self)
    }
}

impl CalculationEngine for Dnd5eSystem {
    fn ability_modifier(&self, score: i32) -> i32 {
        // D&D uses floor division, Rust's / rounds toward zero
        let diff = score - 10;
        if diff >= 0 {
            diff / 2
        } else {
            (diff - 1) / 2
        }
    }

    fn proficiency_bonus(&self, level: u8) -> i32 {
        let level = level.max(1);
        ((level as i32 - 1) / 4) + 2
    }

    fn spell_save_dc(&self, abilities: &AbilityScores, casting: Ability, level: u8) -> i32 {
        8 + self.spell_attack_bonus(abilities, casting, level)
    }

    fn spell_attack_bonus(&self, abilities: &AbilityScores, casting: Ability, level: u8) -> i32 {
        let modifier = self.ability_modifier(abilities.get(casting));
        modifier + self.proficiency_bonus(level)
    }
}

impl SpellcastingSystem for Dnd5eSystem {
    fn spellcasting_ability(&self, class: &str) -> Option<Ability> {
        let class: ClassIdentifier = class.parse().ok()?;
        match class {
            ClassIdentifier::Artificer | ClassIdentifier::Wizard => Some(Ability::Int),
            ClassIdentifier::Cleric
            | ClassIdentifier::Druid
            | ClassIdentifier::Ranger
            | ClassIdentifier::Monk => Some(Ability::Wis),
            ClassIdentifier::Bard
            | ClassIdentifier::Paladin
            | ClassIdentifier::Sorcerer
            | ClassIdentifier::Warlock => Some(Ability::Cha),
            ClassIdentifier::Barbarian | ClassIdentifier::Fighter | ClassIdentifier::Rogue => None,
        }
    }
}
