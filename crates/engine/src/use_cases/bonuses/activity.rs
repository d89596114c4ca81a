//! Activity path - scoped bonuses on a spell's attack and save activities.

use scoped_bonuses_domain::{Activity, Actor, BonusKey, BonusKind, Item};

use super::resolve_bonus;

/// Why an activity can't receive scoped bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvableReason {
    NoOwningItem,
    NoOwningActor,
    NotPlayerCharacter,
    NotSpell,
    NoSourceClass,
}

/// Result of the capability check run before any bonus computation.
#[derive(Debug, Clone, PartialEq)]
pub enum SpellBonusTarget<'a> {
    Resolvable { actor: &'a Actor, class: String },
    Unresolvable(UnresolvableReason),
}

/// Decide whether an activity owned by `item` (itself owned by `actor`) is
/// eligible for scoped bonuses, and under which class.
pub fn resolve_spell_target<'a>(
    item: Option<&Item>,
    actor: Option<&'a Actor>,
) -> SpellBonusTarget<'a> {
    let Some(item) = item else {
        return SpellBonusTarget::Unresolvable(UnresolvableReason::NoOwningItem);
    };
    let Some(actor) = actor else {
        return SpellBonusTarget::Unresolvable(UnresolvableReason::NoOwningActor);
    };
    if !actor.is_player_character() {
        return SpellBonusTarget::Unresolvable(UnresolvableReason::NotPlayerCharacter);
    }
    if !item.is_spell() {
        return SpellBonusTarget::Unresolvable(UnresolvableReason::NotSpell);
    }
    match item.source_class() {
        Some(class) => SpellBonusTarget::Resolvable { actor, class },
        None => SpellBonusTarget::Unresolvable(UnresolvableReason::NoSourceClass),
    }
}

/// Append `bonus` as an additive term of a formula fragment.
pub fn append_bonus_term(formula: &str, bonus: f64) -> String {
    let formula = formula.trim();
    if formula.is_empty() {
        format!("{}", bonus)
    } else {
        format!("{} + {}", formula, bonus)
    }
}

/// Apply the scoped bonus of `kind` to an activity's runtime data.
///
/// - `Attack` appends the bonus to the attack bonus formula, keeping the
///   terms the host already placed there.
/// - `Dc` adds the bonus to the save DC, only if the activity has one.
///
/// Labels are rebuilt after a mutation. Returns the applied bonus, or `None`
/// if nothing changed.
pub fn apply_activity_bonus(
    activity: &mut Activity,
    item: Option<&Item>,
    actor: Option<&Actor>,
    kind: BonusKind,
) -> Option<f64> {
    let (actor, class) = match resolve_spell_target(item, actor) {
        SpellBonusTarget::Resolvable { actor, class } => (actor, class),
        SpellBonusTarget::Unresolvable(reason) => {
            tracing::trace!(activity = %activity.name, ?reason, %kind, "Activity skipped");
            return None;
        }
    };

    let bonus = resolve_bonus(actor, &BonusKey::new(kind, &class));
    if bonus == 0.0 {
        return None;
    }

    match kind {
        BonusKind::Attack => {
            let attack = activity.attack_data_mut()?;
            attack.bonus = append_bonus_term(&attack.bonus, bonus);
        }
        BonusKind::Dc => {
            let dc = activity.save_dc_mut()?;
            dc.value += bonus;
        }
    }

    tracing::debug!(
        actor = %actor.id,
        activity = %activity.name,
        class = %class,
        %kind,
        bonus,
        "Applied scoped bonus to activity"
    );
    activity.prepare_labels();
    Some(bonus)
}
