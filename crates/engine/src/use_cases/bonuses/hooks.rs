//! Preparation hooks applying scoped bonuses.

use scoped_bonuses_domain::{Activity, Actor, BonusKind, Item};

use super::{apply_activity_bonus, apply_class_summary_bonuses};
use crate::infrastructure::log_cache::LogDedupCache;
use crate::use_cases::preparation::PreparationHooks;

/// Applies attack bonuses after activity data, class summary bonuses after
/// spellcasting, and DC bonuses after activity final data.
#[derive(Debug, Default)]
pub struct ScopedBonusHooks {
    log_cache: LogDedupCache,
}

impl ScopedBonusHooks {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreparationHooks for ScopedBonusHooks {
    fn after_activity_prepare_data(
        &mut self,
        activity: &mut Activity,
        item: Option<&Item>,
        actor: Option<&Actor>,
    ) {
        apply_activity_bonus(activity, item, actor, BonusKind::Attack);
    }

    fn after_prepare_spellcasting(&mut self, actor: &mut Actor) {
        apply_class_summary_bonuses(actor, &mut self.log_cache);
    }

    fn after_activity_prepare_final_data(
        &mut self,
        activity: &mut Activity,
        item: Option<&Item>,
        actor: Option<&Actor>,
    ) {
        apply_activity_bonus(activity, item, actor, BonusKind::Dc);
    }
}
