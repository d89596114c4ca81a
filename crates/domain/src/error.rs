//! Unified error types for the domain layer
//!
//! Bonus resolution itself never fails. These errors only surface when text
//! from outside (bonus keys, class names, formulas) is parsed into domain types.

use thiserror::Error;

use crate::value_objects::FormulaParseError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A bonus key outside the scoped bonus namespace
    #[error("Not a scoped bonus key: {0}")]
    ForeignKey(String),

    /// Validation failed (e.g., blank identifiers)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for BonusKind {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "dc" => Ok(Self::Dc),
    ///             _ => Err(DomainError::parse(format!("Unknown bonus kind: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a foreign key error
    pub fn foreign_key(key: impl Into<String>) -> Self {
        Self::ForeignKey(key.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<FormulaParseError> for DomainError {
    fn from(err: FormulaParseError) -> Self {
        Self::Parse(err.to_string())
    }
}
