//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific concern.

pub mod autocomplete;
pub mod bonuses;
pub mod preparation;
pub mod report;
pub mod startup;

// Re-export main types
pub use autocomplete::register_autocomplete_keys;
pub use bonuses::ScopedBonusHooks;
pub use preparation::{DerivedDataPipeline, PreparationHooks};
pub use report::CharacterReport;
pub use startup::{RefreshCharacters, RefreshError, RefreshSummary};
