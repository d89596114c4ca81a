//! AbilityScores - a character's raw ability scores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Ability;

/// Score assumed for any ability the sheet leaves unset.
pub const DEFAULT_SCORE: i32 = 10;

/// Map of ability to base score.
///
/// Serialises as `{"int": 18, "wis": 12}`. Missing abilities read as
/// [`DEFAULT_SCORE`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityScores {
    scores: BTreeMap<Ability, i32>,
}

impl AbilityScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, ability: Ability, value: i32) -> Self {
        self.scores.insert(ability, value);
        self
    }

    /// Get the score for an ability, falling back to [`DEFAULT_SCORE`].
    pub fn get(&self, ability: Ability) -> i32 {
        self.scores.get(&ability).copied().unwrap_or(DEFAULT_SCORE)
    }

    /// Set the score for an ability
    pub fn set(&mut self, ability: Ability, value: i32) {
        self.scores.insert(ability, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_scores_default_to_ten() {
        let scores = AbilityScores::new().with_score(Ability::Int, 18);
        assert_eq!(scores.get(Ability::Int), 18);
        assert_eq!(scores.get(Ability::Wis), DEFAULT_SCORE);
    }

    #[test]
    fn deserializes_from_plain_map() {
        let scores: AbilityScores = serde_json::from_str(r#"{"int": 16, "cha": 8}"#).unwrap();
        assert_eq!(scores.get(Ability::Int), 16);
        assert_eq!(scores.get(Ability::Cha), 8);
    }
}
