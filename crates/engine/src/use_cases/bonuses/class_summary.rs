//! Class summary path - scoped bonuses on each class's spellcasting block.

use scoped_bonuses_domain::{Actor, BonusKey, BonusKind};

use super::resolve_bonus;
use crate::infrastructure::log_cache::LogDedupCache;

/// One bonus added to a class's spellcasting summary.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedClassBonus {
    pub class: String,
    pub kind: BonusKind,
    pub bonus: f64,
    /// Summary value after the bonus
    pub total: f64,
}

/// Add each class's scoped DC and attack bonuses to its spellcasting summary.
///
/// Runs after the host has computed the base summary values. Class items
/// without an identifier or spellcasting block are skipped on their own;
/// the rest are still processed. Every applied bonus is logged once per
/// distinct message through `log_cache`.
pub fn apply_class_summary_bonuses(
    actor: &mut Actor,
    log_cache: &mut LogDedupCache,
) -> Vec<AppliedClassBonus> {
    if !actor.is_player_character() {
        tracing::trace!(actor = %actor.id, "Class summary skipped, not a player character");
        return Vec::new();
    }

    // Resolve against the unmodified actor, then write.
    let pending: Vec<(usize, String, f64, f64)> = actor
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_class() && item.system.spellcasting.is_some())
        .filter_map(|(index, item)| {
            let class = item.class_identifier()?;
            let dc = resolve_bonus(actor, &BonusKey::new(BonusKind::Dc, &class));
            let attack = resolve_bonus(actor, &BonusKey::new(BonusKind::Attack, &class));
            Some((index, class, dc, attack))
        })
        .collect();

    let mut applied = Vec::new();
    for (index, class, dc, attack) in pending {
        let Some(summary) = actor.items[index].system.spellcasting.as_mut() else {
            continue;
        };

        for (kind, bonus) in [(BonusKind::Dc, dc), (BonusKind::Attack, attack)] {
            if bonus == 0.0 {
                continue;
            }
            let slot = match kind {
                BonusKind::Dc => &mut summary.save,
                BonusKind::Attack => &mut summary.attack,
            };
            let total = slot.unwrap_or(0.0) + bonus;
            *slot = Some(total);

            applied.push(AppliedClassBonus {
                class: class.clone(),
                kind,
                bonus,
                total,
            });
        }
    }

    for entry in &applied {
        let label = match entry.kind {
            BonusKind::Dc => "DC",
            BonusKind::Attack => "Attack",
        };
        let message = format!("{} {} {} {:+}", actor.name, entry.class, label, entry.bonus);
        let field = format!("{}-{}", entry.class, entry.kind);
        if log_cache.should_emit(actor.id, &field, &message) {
            tracing::info!(
                actor = %actor.id,
                class = %entry.class,
                kind = %entry.kind,
                bonus = entry.bonus,
                total = entry.total,
                "{}",
                message
            );
        }
    }

    applied
}
