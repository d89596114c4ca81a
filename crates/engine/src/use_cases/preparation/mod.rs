//! Derived-data preparation.
//!
//! Recomputes every derived value on a character from its persisted source
//! data, in fixed stages. Extensions hook in between stages through
//! [`PreparationHooks`].

mod pipeline;

pub use pipeline::DerivedDataPipeline;

use scoped_bonuses_domain::{Activity, Actor, Item};

/// Extension points of the preparation pipeline.
///
/// All stages default to no-ops. Activity stages receive the owning item and
/// actor when there are any; an unowned item is prepared with `None`.
pub trait PreparationHooks: Send {
    /// After an activity's runtime data has been rebuilt from source.
    fn after_activity_prepare_data(
        &mut self,
        _activity: &mut Activity,
        _item: Option<&Item>,
        _actor: Option<&Actor>,
    ) {
    }

    /// After every class's base spellcasting summary has been computed.
    fn after_prepare_spellcasting(&mut self, _actor: &mut Actor) {}

    /// After an activity's final data (save DC) has been computed, before
    /// labels are rebuilt.
    fn after_activity_prepare_final_data(
        &mut self,
        _activity: &mut Activity,
        _item: Option<&Item>,
        _actor: Option<&Actor>,
    ) {
    }
}
