//! End-to-end scenarios.
//!
//! These tests run the full startup pass (autocomplete registration, then a
//! refresh of every player character) against a copy of
//! `test_data/characters.json`, and check the prepared numbers.
//!
//! ```bash
//! cargo test -p scoped-bonuses-engine --lib e2e_tests
//! ```

mod e2e_helpers;

pub use e2e_helpers::*;
