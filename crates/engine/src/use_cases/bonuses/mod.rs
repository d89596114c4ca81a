//! Class-scoped spell bonuses.
//!
//! Bonuses are declared as effect changes keyed
//! `flags.dnd5e-scoped-bonuses.class.spell.<dc|attack>.<class>` and applied
//! to two targets:
//! - the attack and save activities of spells learned through that class
//! - the spellcasting summary of the class item itself

mod activity;
mod class_summary;
mod hooks;
mod resolver;

pub use activity::{
    append_bonus_term, apply_activity_bonus, resolve_spell_target, SpellBonusTarget,
    UnresolvableReason,
};
pub use class_summary::{apply_class_summary_bonuses, AppliedClassBonus};
pub use hooks::ScopedBonusHooks;
pub use resolver::resolve_bonus;
