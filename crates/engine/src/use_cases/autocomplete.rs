//! Publishing bonus keys to the effect editor's autocomplete registry.

use scoped_bonuses_domain::{BonusKey, BonusKind, ClassIdentifier};

use crate::infrastructure::ports::{AutocompleteRegistry, FieldLocalization};

/// Every published key with its localisation, DC before attack per class.
pub fn autocomplete_entries() -> Vec<(BonusKey, FieldLocalization)> {
    ClassIdentifier::all()
        .into_iter()
        .flat_map(|class| {
            BonusKind::all()
                .into_iter()
                .map(move |kind| (BonusKey::for_class(kind, class), localization(kind, class)))
        })
        .collect()
}

fn localization(kind: BonusKind, class: ClassIdentifier) -> FieldLocalization {
    let label = class.label();
    match kind {
        BonusKind::Dc => FieldLocalization {
            name: format!("{} Spell DC", label),
            description: format!("Bonus to spell save DC for {} spells", label),
        },
        BonusKind::Attack => FieldLocalization {
            name: format!("{} Spell Attack", label),
            description: format!("Bonus to spell attack rolls for {} spells", label),
        },
    }
}

/// Register every canonical bonus key with `registry`.
///
/// Does nothing when there is no registry or it is inactive. Returns the
/// number of keys registered.
pub fn register_autocomplete_keys(registry: Option<&dyn AutocompleteRegistry>) -> usize {
    let Some(registry) = registry.filter(|registry| registry.is_active()) else {
        tracing::debug!("Autocomplete registry unavailable, skipping key registration");
        return 0;
    };

    let entries = autocomplete_entries();
    for (key, entry) in &entries {
        registry.set_localization(key.as_str(), entry.clone());
    }
    let keys: Vec<String> = entries
        .iter()
        .map(|(key, _)| key.as_str().to_string())
        .collect();
    registry.add_auto_fields(&keys);

    tracing::info!("Registered {} DAE autocomplete keys.", keys.len());
    keys.len()
}
