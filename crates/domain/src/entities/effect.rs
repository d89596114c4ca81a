//! Active effects - the modifier sources bonuses are read from.
//!
//! An effect lives on an actor or on an item the actor owns. Each carries an
//! ordered list of changes keyed by dotted paths; scoped bonuses are the
//! changes whose key falls under the bonus namespace.

use serde::{Deserialize, Serialize};

use crate::EffectId;

/// Raw value of an effect change.
///
/// Hosts store change values as free text, but numbers and booleans show up
/// in imported data too. Any other shape is kept as-is and counts as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChangeValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Other(serde_json::Value),
}

impl ChangeValue {
    /// Coerce to a number the way the host does.
    ///
    /// Text is trimmed and parsed as a decimal, or as an unsigned integer
    /// with a `0x`, `0o` or `0b` prefix; empty text is 0. Anything
    /// unparseable, non-finite or of another shape is 0.
    pub fn as_number(&self) -> f64 {
        let value = match self {
            Self::Number(value) => *value,
            Self::Bool(true) => 1.0,
            Self::Bool(false) => 0.0,
            Self::Text(text) => parse_text(text).unwrap_or(0.0),
            Self::Other(_) => 0.0,
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

fn parse_text(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    let radix = match text.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => 16,
        Some("0o") => 8,
        Some("0b") => 2,
        _ => return text.parse().ok(),
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |total: f64, c| {
        c.to_digit(radix)
            .map(|digit| total * f64::from(radix) + f64::from(digit))
    })
}

impl From<f64> for ChangeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ChangeValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for ChangeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A single keyed change carried by an effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectChange {
    pub key: String,
    #[serde(default)]
    pub value: Option<ChangeValue>,
}

impl EffectChange {
    pub fn new(key: impl Into<String>, value: impl Into<ChangeValue>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Numeric value of the change; a missing value is 0.
    pub fn numeric_value(&self) -> f64 {
        self.value.as_ref().map_or(0.0, ChangeValue::as_number)
    }
}

/// An effect attached to an actor or item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveEffect {
    pub id: EffectId,
    pub name: String,
    /// Turned off by the user
    #[serde(default)]
    pub disabled: bool,
    /// Turned off by the host (e.g. an unequipped or unattuned item)
    #[serde(default)]
    pub suppressed: bool,
    #[serde(default)]
    pub changes: Vec<EffectChange>,
}

impl ActiveEffect {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EffectId::new(),
            name: name.into(),
            disabled: false,
            suppressed: false,
            changes: Vec::new(),
        }
    }

    pub fn with_change(mut self, key: impl Into<String>, value: impl Into<ChangeValue>) -> Self {
        self.changes.push(EffectChange::new(key, value));
        self
    }

    pub fn with_disabled(self, disabled: bool) -> Self {
        Self { disabled, ..self }
    }

    pub fn with_suppressed(self, suppressed: bool) -> Self {
        Self { suppressed, ..self }
    }

    /// Whether the effect currently contributes anything.
    pub fn is_active(&self) -> bool {
        !self.disabled && !self.suppressed
    }
}
