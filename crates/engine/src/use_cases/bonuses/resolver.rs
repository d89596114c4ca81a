//! Bonus resolution - sums the changes granting one scoped bonus.

use scoped_bonuses_domain::{Actor, BonusKey, EffectChange};

/// Sum every change whose key equals `key` exactly, across the actor's own
/// effects and the effects of every item it owns.
///
/// Disabled and suppressed effects contribute nothing. Values that don't
/// coerce to a number count as 0. A result of 0 means "no bonus".
pub fn resolve_bonus(actor: &Actor, key: &BonusKey) -> f64 {
    actor
        .all_effects()
        .filter(|effect| effect.is_active())
        .flat_map(|effect| effect.changes.iter())
        .filter(|change| key.matches(&change.key))
        .map(EffectChange::numeric_value)
        .sum()
}
