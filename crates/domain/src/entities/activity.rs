//! Activities - the rollable units attached to items.
//!
//! An activity has a persisted *source* configuration and runtime *data* that
//! the host rebuilds from the source on every preparation pass. Anything
//! written into `data` (including scoped bonuses) is therefore discarded and
//! recomputed on the next pass.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Ability, BonusFormula};
use crate::ActivityId;

/// How a save activity's DC is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DcCalculation {
    /// 8 + proficiency + casting ability modifier
    Spellcasting,
    /// A fixed value from the formula
    Flat,
}

/// Persisted DC configuration of a save activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcSource {
    pub calculation: DcCalculation,
    #[serde(default)]
    pub formula: String,
}

/// Persisted configuration of an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActivitySource {
    Attack {
        /// Extra bonus formula, e.g. "@mod" or "1"
        #[serde(default)]
        bonus: String,
    },
    Save {
        ability: Ability,
        /// `None` when no DC is configured
        #[serde(default)]
        dc: Option<DcSource>,
    },
    Utility,
}

/// Runtime attack data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttackData {
    /// Formula fragment added on top of the base spell attack
    pub bonus: String,
}

/// Runtime save DC
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveDc {
    pub value: f64,
}

/// Runtime save data
#[derive(Debug, Clone, PartialEq)]
pub struct SaveData {
    pub ability: Ability,
    pub dc: Option<SaveDc>,
}

/// Runtime shape of an activity; attack and save are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActivityData {
    Attack(AttackData),
    Save(SaveData),
    #[default]
    Utility,
}

/// Values `@` references in formulas resolve to
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RollData {
    /// Casting ability modifier
    pub ability_mod: f64,
    /// Proficiency bonus
    pub prof: f64,
}

impl RollData {
    pub fn lookup(&self, name: &str) -> Option<f64> {
        match name {
            "mod" => Some(self.ability_mod),
            "prof" => Some(self.prof),
            _ => None,
        }
    }
}

/// Display labels derived from the runtime data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityLabels {
    /// e.g. "+7 to hit"
    pub to_hit: Option<String>,
    /// e.g. "DC 15 WIS"
    pub save: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub source: ActivitySource,
    #[serde(skip)]
    pub data: ActivityData,
    #[serde(skip)]
    pub roll_data: RollData,
    #[serde(skip)]
    pub labels: ActivityLabels,
}

impl Activity {
    pub fn new(name: impl Into<String>, source: ActivitySource) -> Self {
        Self {
            id: ActivityId::new(),
            name: name.into(),
            source,
            data: ActivityData::default(),
            roll_data: RollData::default(),
            labels: ActivityLabels::default(),
        }
    }

    pub fn attack(name: impl Into<String>, bonus: impl Into<String>) -> Self {
        Self::new(
            name,
            ActivitySource::Attack {
                bonus: bonus.into(),
            },
        )
    }

    /// A save activity whose DC follows the caster's spellcasting DC.
    pub fn spell_save(name: impl Into<String>, ability: Ability) -> Self {
        Self::new(
            name,
            ActivitySource::Save {
                ability,
                dc: Some(DcSource {
                    calculation: DcCalculation::Spellcasting,
                    formula: String::new(),
                }),
            },
        )
    }

    pub fn attack_data(&self) -> Option<&AttackData> {
        match &self.data {
            ActivityData::Attack(attack) => Some(attack),
            _ => None,
        }
    }

    pub fn attack_data_mut(&mut self) -> Option<&mut AttackData> {
        match &mut self.data {
            ActivityData::Attack(attack) => Some(attack),
            _ => None,
        }
    }

    /// The configured DC, if this is a save activity that has one.
    pub fn save_dc(&self) -> Option<SaveDc> {
        match &self.data {
            ActivityData::Save(save) => save.dc,
            _ => None,
        }
    }

    pub fn save_dc_mut(&mut self) -> Option<&mut SaveDc> {
        match &mut self.data {
            ActivityData::Save(save) => save.dc.as_mut(),
            _ => None,
        }
    }

    /// Rebuild display labels from the current runtime data.
    pub fn prepare_labels(&mut self) {
        self.labels = match &self.data {
            ActivityData::Attack(attack) => ActivityLabels {
                to_hit: Some(self.to_hit_label(&attack.bonus)),
                save: None,
            },
            ActivityData::Save(save) => ActivityLabels {
                to_hit: None,
                save: save
                    .dc
                    .map(|dc| format!("DC {} {}", dc.value, save.ability.as_str())),
            },
            ActivityData::Utility => ActivityLabels::default(),
        };
    }

    fn to_hit_label(&self, bonus: &str) -> String {
        let base = self.roll_data.ability_mod + self.roll_data.prof;
        if bonus.trim().is_empty() {
            return format!("{:+} to hit", base);
        }

        let extra = BonusFormula::parse(bonus)
            .ok()
            .and_then(|formula| formula.evaluate(|name| self.roll_data.lookup(name)));
        match extra {
            Some(extra) => format!("{:+} to hit", base + extra),
            // Formula can't be totalled (dice, unknown references); show it as-is
            None => format!("{:+} + {} to hit", base, bonus),
        }
    }
}
