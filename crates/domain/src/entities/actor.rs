//! Actor entity - characters and other sheet-bearing entities
//!
//! Actors own effects directly and own items, which carry effects of their
//! own. Only player characters (`type: "character"`) receive scoped bonuses.

use serde::{Deserialize, Serialize};

use super::{ActiveEffect, Item};
use crate::value_objects::AbilityScores;
use crate::ActorId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    /// Player character
    Character,
    Npc,
    Vehicle,
    Group,
    /// Unknown type for forward compatibility
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    #[serde(rename = "type")]
    pub actor_type: ActorType,
    #[serde(default)]
    pub abilities: AbilityScores,
    #[serde(default)]
    pub effects: Vec<ActiveEffect>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Actor {
    pub fn new(name: impl Into<String>, actor_type: ActorType) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            actor_type,
            abilities: AbilityScores::default(),
            effects: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn character(name: impl Into<String>) -> Self {
        Self::new(name, ActorType::Character)
    }

    pub fn with_abilities(mut self, abilities: AbilityScores) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn with_effect(mut self, effect: ActiveEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn is_player_character(&self) -> bool {
        self.actor_type == ActorType::Character
    }

    /// Every effect that can grant a bonus: the actor's own effects first,
    /// then each owned item's effects in item order.
    pub fn all_effects(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects
            .iter()
            .chain(self.items.iter().flat_map(|item| item.effects.iter()))
    }

    pub fn class_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_class())
    }

    /// Sum of levels across all class items.
    pub fn total_level(&self) -> u8 {
        self.class_items()
            .map(Item::levels)
            .fold(0u8, |total, levels| total.saturating_add(levels))
    }

    /// Class item by lower-cased identifier.
    pub fn class_item(&self, identifier: &str) -> Option<&Item> {
        self.class_items()
            .find(|item| item.class_identifier().as_deref() == Some(identifier))
    }
}
