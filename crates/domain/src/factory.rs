//! Entity factory - Constructs well-formed instances of every domain entity
//!
//! Every entity that requires a generated identifier is built here, with the
//! identifier source injected (see [`IdSource`]) so tests can construct
//! deterministic fixtures. Feature and ability constructors live on their
//! own types ([`Feature`], [`Ability`]) because their identifiers are
//! supplied by the author, not generated.
//!
//! The factory is total: it never fails, and it applies a canonical default
//! to every omitted optional field.

use crate::entities::{
    Ancestry, Career, Complication, Culture, Domain, ElectiveFeatureLevel, Encounter,
    EncounterGroup, EncounterSlot, Feature, FeatureData, FeatureLevel, Hero, HeroClass, HeroState,
    IncidentOptions, Item, Kit, KitType, LanguageChoiceParams, Monster, MonsterGroup, MonsterRole,
    MonsterSpeed, Perk, Playbook, Sourcebook, SubClass, Title,
};
use crate::ids::{culture_id, IdSource, UuidIdSource};
use crate::value_objects::{CharacteristicValue, PerkList, Size};

/// Levels every class, subclass, and domain is scaffolded with.
const DEFAULT_LEVELS: [u32; 3] = [1, 2, 3];

/// Optional inputs for [`Factory::culture`].
#[derive(Debug, Clone, Default)]
pub struct CultureParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub languages: Vec<String>,
    pub environment: Option<Feature>,
    pub organization: Option<Feature>,
    pub upbringing: Option<Feature>,
}

/// Constructs default, internally-consistent instances of every domain
/// entity.
#[derive(Debug, Clone)]
pub struct Factory<S: IdSource = UuidIdSource> {
    ids: S,
}

impl Factory {
    /// A factory backed by random UUID identifiers.
    pub fn new() -> Self {
        Self { ids: UuidIdSource }
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IdSource> Factory<S> {
    /// A factory with an injected identifier source.
    pub fn with_ids(ids: S) -> Self {
        Self { ids }
    }

    /// A new hero drawing content from the given sourcebooks. Every hero
    /// starts knowing Caelian via a pre-resolved language choice.
    pub fn hero(&mut self, sourcebook_ids: Vec<String>) -> Hero {
        Hero {
            id: self.ids.generate(),
            name: String::new(),
            sourcebook_ids,
            ancestry: None,
            culture: None,
            class: None,
            career: None,
            complication: None,
            features: vec![Feature::language_choice(LanguageChoiceParams {
                id: "default-language".into(),
                name: Some("Default Language".into()),
                selected: vec!["Caelian".into()],
                ..Default::default()
            })],
            state: HeroState {
                wealth: 1,
                ..Default::default()
            },
        }
    }

    pub fn sourcebook(&mut self) -> Sourcebook {
        Sourcebook {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            is_homebrew: true,
            ancestries: Vec::new(),
            cultures: Vec::new(),
            careers: Vec::new(),
            classes: Vec::new(),
            domains: Vec::new(),
            kits: Vec::new(),
            complications: Vec::new(),
            perks: Vec::new(),
            titles: Vec::new(),
            items: Vec::new(),
            monster_groups: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
        }
    }

    pub fn playbook(&mut self) -> Playbook {
        Playbook::default()
    }

    pub fn ancestry(&mut self) -> Ancestry {
        Ancestry {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            features: Vec::new(),
        }
    }

    /// A culture. Named cultures get a deterministic identifier so persisted
    /// heroes can reference built-in cultures stably; unnamed ones get a
    /// generated identifier.
    pub fn culture(&mut self, params: CultureParams) -> Culture {
        let id = match params.name.as_deref() {
            Some(name) => culture_id(name),
            None => self.ids.generate(),
        };
        Culture {
            id,
            name: params.name.unwrap_or_default(),
            description: params.description.unwrap_or_default(),
            languages: params.languages,
            environment: params.environment,
            organization: params.organization,
            upbringing: params.upbringing,
        }
    }

    pub fn career(&mut self) -> Career {
        Career {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            features: Vec::new(),
            inciting_incidents: IncidentOptions::default(),
        }
    }

    pub fn hero_class(&mut self) -> HeroClass {
        HeroClass {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            heroic_resource: String::new(),
            subclass_name: String::new(),
            subclass_count: 1,
            primary_characteristics: Vec::new(),
            features_by_level: DEFAULT_LEVELS.iter().map(|n| FeatureLevel::new(*n)).collect(),
            abilities: Vec::new(),
            subclasses: Vec::new(),
            level: 1,
            characteristics: Vec::new(),
        }
    }

    pub fn subclass(&mut self) -> SubClass {
        SubClass {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            features_by_level: DEFAULT_LEVELS
                .iter()
                .map(|n| ElectiveFeatureLevel::new(*n))
                .collect(),
            selected: false,
        }
    }

    pub fn complication(&mut self) -> Complication {
        Complication {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            features: Vec::new(),
        }
    }

    pub fn domain(&mut self) -> Domain {
        Domain {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            features_by_level: DEFAULT_LEVELS
                .iter()
                .map(|n| ElectiveFeatureLevel::new(*n))
                .collect(),
        }
    }

    pub fn kit(&mut self) -> Kit {
        Kit {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            kit_type: KitType::Standard,
            armor: Vec::new(),
            weapon: Vec::new(),
            stamina: 0,
            speed: 0,
            stability: 0,
            melee_damage: None,
            ranged_damage: None,
            melee_distance: 0,
            ranged_distance: 0,
            disengage: 0,
            features: Vec::new(),
        }
    }

    pub fn perk(&mut self) -> Perk {
        Perk {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            data: FeatureData::Text,
            list: PerkList::Crafting,
        }
    }

    pub fn title(&mut self) -> Title {
        Title {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            echelon: 1,
            prerequisites: String::new(),
            features: Vec::new(),
        }
    }

    pub fn item(&mut self) -> Item {
        Item {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            features: Vec::new(),
            count: 1,
        }
    }

    pub fn monster_group(&mut self) -> MonsterGroup {
        MonsterGroup {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            information: Vec::new(),
            malice: Vec::new(),
            monsters: Vec::new(),
        }
    }

    pub fn monster(&mut self) -> Monster {
        Monster {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            level: 1,
            role: MonsterRole::default(),
            keywords: Vec::new(),
            encounter_value: 0,
            size: Size::default(),
            speed: MonsterSpeed {
                value: 5,
                modes: String::new(),
            },
            stamina: 5,
            stability: 0,
            free_strike_damage: 2,
            characteristics: CharacteristicValue::zeroed(),
            features: Vec::new(),
        }
    }

    pub fn encounter(&mut self) -> Encounter {
        Encounter {
            id: self.ids.generate(),
            name: String::new(),
            description: String::new(),
            groups: Vec::new(),
        }
    }

    pub fn encounter_group(&mut self) -> EncounterGroup {
        EncounterGroup {
            id: self.ids.generate(),
            slots: Vec::new(),
        }
    }

    pub fn encounter_slot(&mut self, monster_id: impl Into<String>) -> EncounterSlot {
        EncounterSlot {
            id: self.ids.generate(),
            monster_id: monster_id.into(),
            count: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::FeatureType;
    use crate::ids::SequentialIdSource;
    use crate::value_objects::Characteristic;

    fn test_factory() -> Factory<SequentialIdSource> {
        Factory::with_ids(SequentialIdSource::new("id"))
    }

    #[test]
    fn injected_ids_make_entities_deterministic() {
        let mut factory = test_factory();
        assert_eq!(factory.ancestry().id, "id-0");
        assert_eq!(factory.career().id, "id-1");

        let mut again = test_factory();
        assert_eq!(again.ancestry().id, "id-0");
    }

    #[test]
    fn named_culture_id_is_deterministic() {
        let mut factory = Factory::new();
        let first = factory.culture(CultureParams {
            name: Some("Caelian".into()),
            ..Default::default()
        });
        let second = factory.culture(CultureParams {
            name: Some("Caelian".into()),
            ..Default::default()
        });

        assert_eq!(first.id, "culture-caelian");
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn unnamed_cultures_get_distinct_ids() {
        let mut factory = Factory::new();
        let first = factory.culture(CultureParams::default());
        let second = factory.culture(CultureParams::default());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn hero_starts_with_caelian_preselected() {
        let mut factory = test_factory();
        let hero = factory.hero(vec!["core".into()]);

        assert_eq!(hero.state.wealth, 1);
        assert_eq!(hero.features.len(), 1);

        let default_language = &hero.features[0];
        assert_eq!(default_language.id, "default-language");
        assert_eq!(default_language.feature_type(), FeatureType::LanguageChoice);
        assert!(default_language.is_chosen());
    }

    #[test]
    fn class_and_subclass_scaffold_three_levels() {
        let mut factory = test_factory();
        let class = factory.hero_class();
        assert_eq!(class.level, 1);
        assert_eq!(
            class.features_by_level.iter().map(|l| l.level).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        let subclass = factory.subclass();
        assert!(!subclass.selected);
        assert_eq!(subclass.features_by_level.len(), 3);
        assert!(subclass.features_by_level[0].optional_features.is_empty());
    }

    #[test]
    fn monster_defaults_cover_all_characteristics() {
        let mut factory = test_factory();
        let monster = factory.monster();

        assert_eq!(monster.stamina, 5);
        assert_eq!(monster.free_strike_damage, 2);
        assert_eq!(monster.size.to_string(), "1M");
        assert_eq!(monster.characteristics.len(), 5);
        assert_eq!(
            monster.characteristics[0].characteristic,
            Characteristic::Might
        );
    }

    #[test]
    fn encounter_slot_references_its_monster() {
        let mut factory = test_factory();
        let slot = factory.encounter_slot("monster-7");
        assert_eq!(slot.monster_id, "monster-7");
        assert_eq!(slot.count, 1);
    }
}
