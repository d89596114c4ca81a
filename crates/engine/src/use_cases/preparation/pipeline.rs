//! The staged preparation pass.

use std::sync::Arc;

use scoped_bonuses_domain::{
    Ability, AbilityScores, Activity, ActivityData, ActivityLabels, ActivitySource, Actor,
    AttackData, BonusFormula, DcCalculation, Dnd5eSystem, GameSystem, Item, RollData, SaveData,
    SaveDc,
};

use super::PreparationHooks;

/// Rebuilds derived data from source and runs hooks between stages.
///
/// Stage order for a character:
/// 1. activity data, then `after_activity_prepare_data`
/// 2. class spellcasting summaries, then `after_prepare_spellcasting`
/// 3. activity final data, then `after_activity_prepare_final_data`, then labels
///
/// Every pass starts from persisted source data, so running it repeatedly
/// gives the same result.
pub struct DerivedDataPipeline {
    system: Arc<dyn GameSystem>,
    hooks: Vec<Box<dyn PreparationHooks>>,
}

impl DerivedDataPipeline {
    pub fn new(system: Arc<dyn GameSystem>) -> Self {
        Self {
            system,
            hooks: Vec::new(),
        }
    }

    /// Pipeline using D&D 5e rules.
    pub fn dnd5e() -> Self {
        Self::new(Arc::new(Dnd5eSystem::new()))
    }

    pub fn with_hooks(mut self, hooks: impl PreparationHooks + 'static) -> Self {
        self.hooks.push(Box::new(hooks));
        self
    }

    /// Run every stage over a character and everything it owns.
    pub fn prepare_actor(&mut self, actor: &mut Actor) {
        let level = actor.total_level();

        for index in 0..actor.items.len() {
            let roll_data = self.roll_data(&actor.items[index], Some(&*actor), level);
            let mut activities = std::mem::take(&mut actor.items[index].activities);
            for activity in &mut activities {
                prepare_data(activity, roll_data);
                for hooks in &mut self.hooks {
                    hooks.after_activity_prepare_data(
                        activity,
                        Some(&actor.items[index]),
                        Some(&*actor),
                    );
                }
            }
            actor.items[index].activities = activities;
        }

        self.prepare_spellcasting(actor, level);
        for hooks in &mut self.hooks {
            hooks.after_prepare_spellcasting(actor);
        }

        for index in 0..actor.items.len() {
            let mut activities = std::mem::take(&mut actor.items[index].activities);
            for activity in &mut activities {
                prepare_final_data(activity);
                for hooks in &mut self.hooks {
                    hooks.after_activity_prepare_final_data(
                        activity,
                        Some(&actor.items[index]),
                        Some(&*actor),
                    );
                }
                activity.prepare_labels();
            }
            actor.items[index].activities = activities;
        }

        tracing::debug!(
            actor = %actor.id,
            name = %actor.name,
            items = actor.items.len(),
            level,
            "Prepared actor"
        );
    }

    /// Prepare an item that no actor owns. Activity hooks see no actor.
    pub fn prepare_item(&mut self, item: &mut Item) {
        let roll_data = self.roll_data(item, None, 0);
        let mut activities = std::mem::take(&mut item.activities);

        for activity in &mut activities {
            prepare_data(activity, roll_data);
            for hooks in &mut self.hooks {
                hooks.after_activity_prepare_data(activity, Some(item), None);
            }
        }
        for activity in &mut activities {
            prepare_final_data(activity);
            for hooks in &mut self.hooks {
                hooks.after_activity_prepare_final_data(activity, Some(item), None);
            }
            activity.prepare_labels();
        }

        item.activities = activities;
    }

    /// Base save DC and attack bonus for every spellcasting class.
    fn prepare_spellcasting(&self, actor: &mut Actor, level: u8) {
        let engine = self.system.calculation_engine();
        let abilities = &actor.abilities;

        for item in actor.items.iter_mut().filter(|item| item.is_class()) {
            let class = item.class_identifier();
            let Some(spellcasting) = item.system.spellcasting.as_mut() else {
                continue;
            };

            let ability = spellcasting
                .ability
                .or_else(|| class.as_deref().and_then(|c| self.default_casting_ability(c)));
            match ability {
                Some(ability) => {
                    spellcasting.save = Some(engine.spell_save_dc(abilities, ability, level) as f64);
                    spellcasting.attack =
                        Some(engine.spell_attack_bonus(abilities, ability, level) as f64);
                }
                None => {
                    tracing::trace!(class = ?class, "No casting ability for class");
                    spellcasting.save = None;
                    spellcasting.attack = None;
                }
            }
        }
    }

    /// `@mod` and `@prof` for activities on `item`.
    fn roll_data(&self, item: &Item, actor: Option<&Actor>, level: u8) -> RollData {
        let engine = self.system.calculation_engine();
        let defaults = AbilityScores::default();
        let abilities = actor.map_or(&defaults, |actor| &actor.abilities);

        RollData {
            ability_mod: self
                .casting_ability(item, actor)
                .map_or(0, |ability| engine.ability_modifier(abilities.get(ability)))
                as f64,
            prof: engine.proficiency_bonus(level) as f64,
        }
    }

    /// Casting ability of a spell: the owning class item's configured
    /// ability, else the system default for the spell's source class.
    fn casting_ability(&self, item: &Item, actor: Option<&Actor>) -> Option<Ability> {
        let class = item.source_class()?;
        actor
            .and_then(|actor| actor.class_item(&class))
            .and_then(|class_item| class_item.system.spellcasting.as_ref())
            .and_then(|spellcasting| spellcasting.ability)
            .or_else(|| self.default_casting_ability(&class))
    }

    fn default_casting_ability(&self, class: &str) -> Option<Ability> {
        self.system
            .spellcasting_system()
            .and_then(|spellcasting| spellcasting.spellcasting_ability(class))
    }
}

/// Rebuild an activity's runtime shape from its source.
///
/// A configured save DC gets a slot here; its value is set in
/// [`prepare_final_data`].
fn prepare_data(activity: &mut Activity, roll_data: RollData) {
    activity.roll_data = roll_data;
    activity.labels = ActivityLabels::default();
    activity.data = match &activity.source {
        ActivitySource::Attack { bonus } => ActivityData::Attack(AttackData {
            bonus: bonus.clone(),
        }),
        ActivitySource::Save { ability, dc } => ActivityData::Save(SaveData {
            ability: *ability,
            dc: dc.as_ref().map(|_| SaveDc { value: 0.0 }),
        }),
        ActivitySource::Utility => ActivityData::Utility,
    };
}

/// Compute the save DC of a save activity.
fn prepare_final_data(activity: &mut Activity) {
    let roll_data = activity.roll_data;
    let (ActivitySource::Save { dc: Some(source), .. }, ActivityData::Save(save)) =
        (&activity.source, &mut activity.data)
    else {
        return;
    };

    let value = match source.calculation {
        DcCalculation::Spellcasting => Some(8.0 + roll_data.prof + roll_data.ability_mod),
        DcCalculation::Flat => BonusFormula::parse(&source.formula)
            .ok()
            .and_then(|formula| formula.evaluate(|name| roll_data.lookup(name))),
    };
    if value.is_none() {
        tracing::trace!(activity = %activity.name, formula = %source.formula, "Flat DC cannot be totalled");
    }
    save.dc = value.map(|value| SaveDc { value });
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_bonuses_domain::DcSource;
    use std::sync::Mutex;

    fn wizard() -> Actor {
        Actor::character("Elara")
            .with_abilities(AbilityScores::new().with_score(Ability::Int, 18))
            .with_item(Item::spellcasting_class("Wizard", "wizard", 5, Ability::Int))
            .with_item(
                Item::spell("Fireball", "wizard")
                    .with_activity(Activity::spell_save("Fireball", Ability::Dex)),
            )
            .with_item(
                Item::spell("Fire Bolt", "wizard").with_activity(Activity::attack("Fire Bolt", "")),
            )
    }

    fn activity<'a>(actor: &'a Actor, item: &str) -> &'a Activity {
        &actor
            .items
            .iter()
            .find(|i| i.name == item)
            .unwrap()
            .activities[0]
    }

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl PreparationHooks for Recorder {
        fn after_activity_prepare_data(
            &mut self,
            activity: &mut Activity,
            _item: Option<&Item>,
            actor: Option<&Actor>,
        ) {
            self.calls.lock().unwrap().push(format!(
                "data:{}:{}",
                activity.name,
                actor.is_some()
            ));
        }

        fn after_prepare_spellcasting(&mut self, _actor: &mut Actor) {
            self.calls.lock().unwrap().push("spellcasting".to_string());
        }

        fn after_activity_prepare_final_data(
            &mut self,
            activity: &mut Activity,
            _item: Option<&Item>,
            _actor: Option<&Actor>,
        ) {
            // Labels are rebuilt after this stage
            assert_eq!(activity.labels, ActivityLabels::default());
            self.calls
                .lock()
                .unwrap()
                .push(format!("final:{}", activity.name));
        }
    }

    #[test]
    fn computes_base_spellcasting_numbers() {
        let mut actor = wizard();
        DerivedDataPipeline::dnd5e().prepare_actor(&mut actor);

        let summary = actor
            .class_item("wizard")
            .and_then(|item| item.system.spellcasting.clone())
            .unwrap();
        assert_eq!(summary.save, Some(15.0));
        assert_eq!(summary.attack, Some(7.0));

        let fireball = activity(&actor, "Fireball");
        assert_eq!(fireball.save_dc(), Some(SaveDc { value: 15.0 }));
        assert_eq!(fireball.labels.save.as_deref(), Some("DC 15 DEX"));

        let fire_bolt = activity(&actor, "Fire Bolt");
        assert_eq!(fire_bolt.attack_data().unwrap().bonus, "");
        assert_eq!(fire_bolt.labels.to_hit.as_deref(), Some("+7 to hit"));
    }

    #[test]
    fn stages_run_in_order() {
        let recorder = Recorder::default();
        let mut pipeline = DerivedDataPipeline::dnd5e().with_hooks(recorder.clone());
        let mut actor = wizard();

        pipeline.prepare_actor(&mut actor);

        assert_eq!(
            *recorder.calls.lock().unwrap(),
            vec![
                "data:Fireball:true",
                "data:Fire Bolt:true",
                "spellcasting",
                "final:Fireball",
                "final:Fire Bolt",
            ]
        );
    }

    #[test]
    fn unowned_items_prepare_without_an_actor() {
        let recorder = Recorder::default();
        let mut pipeline = DerivedDataPipeline::dnd5e().with_hooks(recorder.clone());
        let mut item = Item::spell("Fireball", "wizard")
            .with_activity(Activity::spell_save("Fireball", Ability::Dex));

        pipeline.prepare_item(&mut item);

        assert_eq!(
            *recorder.calls.lock().unwrap(),
            vec!["data:Fireball:false", "final:Fireball"]
        );
        // 8 + proficiency 2 + INT 10
        assert_eq!(item.activities[0].save_dc(), Some(SaveDc { value: 10.0 }));
    }

    #[test]
    fn flat_dcs_use_their_formula() {
        let mut actor = Actor::character("Elara").with_item(
            Item::spell("Trap", "wizard")
                .with_activity(Activity::new(
                    "Fixed",
                    ActivitySource::Save {
                        ability: Ability::Con,
                        dc: Some(DcSource {
                            calculation: DcCalculation::Flat,
                            formula: "12 + 1".to_string(),
                        }),
                    },
                ))
                .with_activity(Activity::new(
                    "Dice",
                    ActivitySource::Save {
                        ability: Ability::Con,
                        dc: Some(DcSource {
                            calculation: DcCalculation::Flat,
                            formula: "1d20".to_string(),
                        }),
                    },
                ))
                .with_activity(Activity::new(
                    "Unset",
                    ActivitySource::Save {
                        ability: Ability::Con,
                        dc: None,
                    },
                )),
        );

        DerivedDataPipeline::dnd5e().prepare_actor(&mut actor);

        let activities = &actor.items[0].activities;
        assert_eq!(activities[0].save_dc(), Some(SaveDc { value: 13.0 }));
        assert_eq!(activities[1].save_dc(), None);
        assert_eq!(activities[2].save_dc(), None);
    }

    #[test]
    fn casting_ability_falls_back_to_class_default() {
        let mut actor = Actor::character("Brother Tomas")
            .with_abilities(AbilityScores::new().with_score(Ability::Wis, 16))
            .with_item(Item::spell("Sacred Flame", "cleric").with_activity(
                Activity::spell_save("Sacred Flame", Ability::Dex),
            ));

        DerivedDataPipeline::dnd5e().prepare_actor(&mut actor);

        // No class item: level 0 uses proficiency 2, WIS 16 gives +3
        assert_eq!(
            actor.items[0].activities[0].save_dc(),
            Some(SaveDc { value: 13.0 })
        );
    }

    #[test]
    fn repeated_passes_are_stable() {
        let mut actor = wizard();
        let mut pipeline = DerivedDataPipeline::dnd5e();

        pipeline.prepare_actor(&mut actor);
        let once = actor.clone();
        pipeline.prepare_actor(&mut actor);

        assert_eq!(actor, once);
    }
}
