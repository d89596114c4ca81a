//! Domain entities - host documents with identity

mod activity;
mod actor;
mod effect;
mod item;

pub use activity::{
    Activity, ActivityData, ActivityLabels, ActivitySource, AttackData, DcCalculation, DcSource,
    RollData, SaveData, SaveDc,
};
pub use actor::{Actor, ActorType};
pub use effect::{ActiveEffect, ChangeValue, EffectChange};
pub use item::{ClassSpellcasting, Item, ItemSystem, ItemType};
