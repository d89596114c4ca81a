//! Item entity - spells, classes, and equipment owned by an actor
//!
//! Only two item types matter to scoped bonuses: `spell` items carry a source
//! class naming whose bonuses apply to their activities, and `class` items
//! carry the per-class spellcasting summary. Effects on any item type count
//! towards the actor's bonuses.

use serde::{Deserialize, Serialize};

use super::{ActiveEffect, Activity};
use crate::value_objects::Ability;
use crate::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Spell,
    Class,
    Subclass,
    Weapon,
    Equipment,
    Consumable,
    Feat,
    Loot,
    Tool,
    /// Unknown type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spell => write!(f, "spell"),
            Self::Class => write!(f, "class"),
            Self::Subclass => write!(f, "subclass"),
            Self::Weapon => write!(f, "weapon"),
            Self::Equipment => write!(f, "equipment"),
            Self::Consumable => write!(f, "consumable"),
            Self::Feat => write!(f, "feat"),
            Self::Loot => write!(f, "loot"),
            Self::Tool => write!(f, "tool"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Spellcasting block of a class item.
///
/// `save` and `attack` are derived: the host recomputes them on every pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSpellcasting {
    /// e.g. "full", "half", "pact"
    #[serde(default)]
    pub progression: Option<String>,
    #[serde(default)]
    pub ability: Option<Ability>,
    #[serde(default)]
    pub save: Option<f64>,
    #[serde(default)]
    pub attack: Option<f64>,
}

/// Type-specific item data. Fields are optional because most only apply to
/// one item type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSystem {
    /// Spells: the class the spell was learned through
    #[serde(default)]
    pub source_class: Option<String>,
    /// Classes: the class identifier
    #[serde(default)]
    pub identifier: Option<String>,
    /// Classes: levels taken in this class
    #[serde(default)]
    pub levels: Option<u8>,
    /// Classes: spellcasting configuration and derived summary
    #[serde(default)]
    pub spellcasting: Option<ClassSpellcasting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub system: ItemSystem,
    #[serde(default)]
    pub effects: Vec<ActiveEffect>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// Lower-case a text field, treating missing or blank text as absent.
fn lowered(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_lowercase())
}

impl Item {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            item_type,
            system: ItemSystem::default(),
            effects: Vec::new(),
            activities: Vec::new(),
        }
    }

    /// A spell learned through `source_class`.
    pub fn spell(name: impl Into<String>, source_class: impl Into<String>) -> Self {
        let mut item = Self::new(name, ItemType::Spell);
        item.system.source_class = Some(source_class.into());
        item
    }

    /// A spellcasting class item.
    pub fn spellcasting_class(
        name: impl Into<String>,
        identifier: impl Into<String>,
        levels: u8,
        ability: Ability,
    ) -> Self {
        let mut item = Self::new(name, ItemType::Class);
        item.system.identifier = Some(identifier.into());
        item.system.levels = Some(levels);
        item.system.spellcasting = Some(ClassSpellcasting {
            progression: Some("full".to_string()),
            ability: Some(ability),
            save: None,
            attack: None,
        });
        item
    }

    pub fn with_effect(mut self, effect: ActiveEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    pub fn is_spell(&self) -> bool {
        self.item_type == ItemType::Spell
    }

    pub fn is_class(&self) -> bool {
        self.item_type == ItemType::Class
    }

    /// Lower-cased source class of a spell, if set.
    pub fn source_class(&self) -> Option<String> {
        lowered(self.system.source_class.as_deref())
    }

    /// Lower-cased class identifier, if set.
    pub fn class_identifier(&self) -> Option<String> {
        lowered(self.system.identifier.as_deref())
    }

    pub fn levels(&self) -> u8 {
        self.system.levels.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_class_is_lower_cased() {
        let spell = Item::spell("Fireball", "Wizard");
        assert_eq!(spell.source_class().as_deref(), Some("wizard"));
    }

    #[test]
    fn blank_source_class_is_absent() {
        let spell = Item::spell("Mystery", "  ");
        assert_eq!(spell.source_class(), None);
        assert_eq!(Item::new("Dagger", ItemType::Weapon).source_class(), None);
    }

    #[test]
    fn unknown_item_types_deserialize() {
        let json = r#"{"id": "0b7a3f6e-0d52-4d51-8a3c-1f4d1a0a9a11", "name": "Cart", "type": "vehicle"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_type, ItemType::Unknown);
        assert!(item.effects.is_empty());
    }

    #[test]
    fn class_item_exposes_identifier_and_levels() {
        let class = Item::spellcasting_class("Cleric", "CLERIC", 3, Ability::Wis);
        assert!(class.is_class());
        assert_eq!(class.class_identifier().as_deref(), Some("cleric"));
        assert_eq!(class.levels(), 3);
    }
}
