//! In-process autocomplete registry.
//!
//! Stands in for an external effect-editor registry when the engine runs on
//! its own, so registered keys can be listed.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::infrastructure::ports::{AutocompleteRegistry, FieldLocalization};

#[derive(Default)]
struct Entries {
    fields: Vec<String>,
    localization: BTreeMap<String, FieldLocalization>,
}

/// Registry that records everything published to it.
pub struct InMemoryAutocompleteRegistry {
    active: bool,
    entries: RwLock<Entries>,
}

impl InMemoryAutocompleteRegistry {
    pub fn new(active: bool) -> Self {
        Self {
            active,
            entries: RwLock::new(Entries::default()),
        }
    }

    /// Registered field keys in registration order.
    pub fn fields(&self) -> Vec<String> {
        self.entries
            .read()
            .map(|entries| entries.fields.clone())
            .unwrap_or_default()
    }

    pub fn localization(&self, key: &str) -> Option<FieldLocalization> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.localization.get(key).cloned())
    }
}

impl AutocompleteRegistry for InMemoryAutocompleteRegistry {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_localization(&self, key: &str, entry: FieldLocalization) {
        if let Ok(mut entries) = self.entries.write() {
            entries.localization.insert(key.to_string(), entry);
        }
    }

    fn add_auto_fields(&self, keys: &[String]) {
        if let Ok(mut entries) = self.entries.write() {
            entries.fields.extend(keys.iter().cloned());
        }
    }
}
