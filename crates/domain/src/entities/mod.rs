//! Domain entities - Core business objects with identity

mod ability;
mod ancestry;
mod career;
mod complication;
mod culture;
mod domain;
mod encounter;
mod feature;
mod hero;
mod hero_class;
mod item;
mod kit;
mod monster;
mod perk;
mod sourcebook;
mod title;

pub use ability::{
    Ability, AbilityDistance, AbilityDistanceType, AbilityEffect, AbilityKeyword, AbilityParams,
    AbilityType, AbilityUsage, PowerRoll, PowerRollParams, PowerRollType,
};
pub use ancestry::Ancestry;
pub use career::{Career, Element, IncidentOptions};
pub use complication::Complication;
pub use culture::Culture;
pub use domain::Domain;
pub use encounter::{Encounter, EncounterGroup, EncounterSlot};
pub use feature::{
    AbilityCostData, AbilityCostParams, AbilityData, BonusData, BonusParams, ChoiceData,
    ChoiceOption, ChoiceParams, ClassAbilityData, ClassAbilityParams, DamageModifierData,
    DamageModifierParams, DomainChoiceParams, DomainData, DomainFeatureData, DomainFeatureParams,
    Feature, FeatureData, FeatureType, KitChoiceParams, KitData, KitTypeData, KitTypeParams,
    LanguageChoiceData, LanguageChoiceParams, LanguageData, LanguageParams, MaliceData,
    MultipleData, MultipleParams, PerkChoiceParams, PerkData, SizeData, SizeParams, SkillChoiceData,
    SkillChoiceParams, SkillData, SkillParams, SpeedData, SpeedParams, TitleChoiceParams, TitleData,
};
pub use hero::{Hero, HeroState};
pub use hero_class::{ElectiveFeatureLevel, FeatureLevel, HeroClass, SubClass};
pub use item::Item;
pub use kit::{Kit, KitDamageBonus, KitType};
pub use monster::{
    MinionFilter, Monster, MonsterFilter, MonsterGroup, MonsterRole, MonsterRoleType, MonsterSpeed,
};
pub use perk::Perk;
pub use sourcebook::{LanguageDefinition, Playbook, SkillDefinition, Sourcebook};
pub use title::Title;
