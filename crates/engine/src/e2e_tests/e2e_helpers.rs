//! E2E test helpers for constructing the full application stack.
//!
//! Provides a fully-wired App over a temporary copy of the character fixture.

use std::path::PathBuf;
use std::sync::Arc;

use scoped_bonuses_domain::{Activity, Actor, ClassSpellcasting};
use tempfile::TempDir;

use crate::app::App;
use crate::infrastructure::autocomplete::InMemoryAutocompleteRegistry;
use crate::infrastructure::json_store::JsonCharacterRepo;
use crate::infrastructure::ports::AutocompleteRegistry;
use crate::test_fixtures::fixture_path;

// =============================================================================
// Test Context
// =============================================================================

/// A wired App plus handles to its adapters.
///
/// Keeps the temp directory alive for as long as the context lives.
pub struct E2ETestContext {
    pub app: App,
    pub characters: Arc<JsonCharacterRepo>,
    pub autocomplete: Arc<InMemoryAutocompleteRegistry>,
    pub data_path: PathBuf,
    _dir: TempDir,
}

impl E2ETestContext {
    /// Copy `characters.json` into a temp dir and build an App over it.
    pub async fn setup(persist: bool) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let data_path = dir.path().join("characters.json");
        std::fs::copy(fixture_path("characters.json"), &data_path).expect("copy fixture");

        let characters = Arc::new(
            JsonCharacterRepo::load(&data_path, persist)
                .await
                .expect("load fixture"),
        );
        let autocomplete = Arc::new(InMemoryAutocompleteRegistry::new(true));
        let registry: Arc<dyn AutocompleteRegistry> = autocomplete.clone();
        let app = App::new(characters.clone(), Some(registry));

        Self {
            app,
            characters,
            autocomplete,
            data_path,
            _dir: dir,
        }
    }

    /// Current copy of the actor named `name`.
    pub async fn actor(&self, name: &str) -> Actor {
        self.characters
            .all()
            .await
            .into_iter()
            .find(|actor| actor.name == name)
            .unwrap_or_else(|| panic!("No actor named '{}'", name))
    }
}

// =============================================================================
// Assertions Helpers
// =============================================================================

/// Spellcasting summary of `class` on `actor`.
pub fn class_summary(actor: &Actor, class: &str) -> ClassSpellcasting {
    actor
        .class_item(class)
        .and_then(|item| item.system.spellcasting.clone())
        .unwrap_or_else(|| panic!("{} has no spellcasting {} class", actor.name, class))
}

/// First activity of the item named `item`.
pub fn activity<'a>(actor: &'a Actor, item: &str) -> &'a Activity {
    actor
        .items
        .iter()
        .find(|i| i.name == item)
        .and_then(|i| i.activities.first())
        .unwrap_or_else(|| panic!("{} has no activity on '{}'", actor.name, item))
}
