//! Test fixtures loader for JSON fixture files and common test helpers.
//!
//! This module provides utilities for loading test data from the `test_data/` directory
//! and builders for the characters most tests need.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{characters, fixture_actor};
//!
//! #[test]
//! fn wizard_gets_bonus() {
//!     let elara = fixture_actor("Elara");
//!     let pc = characters::wizard(5, 18);
//!     // ... test logic
//! }
//! ```

use std::path::PathBuf;

use scoped_bonuses_domain::Actor;

// =============================================================================
// Fixture Loading
// =============================================================================

/// Path of a file under test_data/.
pub fn fixture_path(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path)
}

/// Load a JSON fixture from test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = fixture_path(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

/// Every actor in `characters.json`.
pub fn fixture_actors() -> Vec<Actor> {
    load_fixture("characters.json")
}

/// One actor from `characters.json` by name.
///
/// # Panics
///
/// Panics if no actor has that name.
pub fn fixture_actor(name: &str) -> Actor {
    fixture_actors()
        .into_iter()
        .find(|actor| actor.name == name)
        .unwrap_or_else(|| panic!("No fixture actor named '{}'", name))
}

// =============================================================================
// Character Builders
// =============================================================================

pub mod characters {
    use scoped_bonuses_domain::{
        Ability, AbilityScores, ActiveEffect, Activity, Actor, BonusKey, BonusKind, Item,
    };

    /// A single-class wizard with one save spell and one attack cantrip.
    pub fn wizard(level: u8, intelligence: i32) -> Actor {
        Actor::character("Elara")
            .with_abilities(AbilityScores::new().with_score(Ability::Int, intelligence))
            .with_item(Item::spellcasting_class("Wizard", "wizard", level, Ability::Int))
            .with_item(
                Item::spell("Fireball", "wizard")
                    .with_activity(Activity::spell_save("Fireball", Ability::Dex)),
            )
            .with_item(
                Item::spell("Fire Bolt", "wizard").with_activity(Activity::attack("Fire Bolt", "")),
            )
    }

    /// An active effect granting one scoped bonus.
    pub fn bonus_effect(kind: BonusKind, class: &str, value: &str) -> ActiveEffect {
        ActiveEffect::new(format!("{} {} bonus", class, kind))
            .with_change(BonusKey::new(kind, class).as_str(), value)
    }
}
