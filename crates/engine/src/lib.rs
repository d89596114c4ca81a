//! Scoped bonuses engine library.
//!
//! Applies class-scoped spell DC and spell attack bonuses while character
//! data is prepared.
//!
//! ## Structure
//!
//! - `use_cases/` - Bonus resolution, the preparation pipeline, startup
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for integration testing.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end scenarios over the snapshot repository.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
