//! Read-only summaries of prepared characters.

use serde::Serialize;

use scoped_bonuses_domain::{Actor, ActorId};

/// Derived spellcasting numbers of one class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassReport {
    pub class: String,
    pub save: Option<f64>,
    pub attack: Option<f64>,
}

/// Display labels of one activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityReport {
    pub item: String,
    pub activity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_hit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterReport {
    pub id: ActorId,
    pub name: String,
    pub classes: Vec<ClassReport>,
    pub activities: Vec<ActivityReport>,
}

impl CharacterReport {
    /// Summarise a prepared actor. Utility activities are left out.
    pub fn from_actor(actor: &Actor) -> Self {
        let classes = actor
            .class_items()
            .filter_map(|item| {
                let spellcasting = item.system.spellcasting.as_ref()?;
                Some(ClassReport {
                    class: item.class_identifier()?,
                    save: spellcasting.save,
                    attack: spellcasting.attack,
                })
            })
            .collect();

        let activities = actor
            .items
            .iter()
            .flat_map(|item| {
                item.activities.iter().filter_map(move |activity| {
                    if activity.labels.to_hit.is_none() && activity.labels.save.is_none() {
                        return None;
                    }
                    Some(ActivityReport {
                        item: item.name.clone(),
                        activity: activity.name.clone(),
                        to_hit: activity.labels.to_hit.clone(),
                        save: activity.labels.save.clone(),
                    })
                })
            })
            .collect();

        Self {
            id: actor.id,
            name: actor.name.clone(),
            classes,
            activities,
        }
    }
}
