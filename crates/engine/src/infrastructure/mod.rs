//! Infrastructure - external dependency implementations.
//!
//! Contains port traits and their implementations.

pub mod autocomplete;
pub mod config;
pub mod json_store;
pub mod log_cache;
pub mod ports;
