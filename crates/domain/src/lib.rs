//! Herosmith domain - progression rules for hero building
//!
//! Heroes gain features from ancestry, culture, career, class and subclass,
//! complications, items, and titles. Some features embed a choice that must
//! be resolved before they are complete. This crate models the closed set of
//! feature variants, constructs well-formed entities with canonical defaults,
//! flattens nested feature trees into display-ready lists, and evaluates
//! whether every embedded choice has been satisfied.
//!
//! The crate is pure: no I/O, no global state, no async. Identifier
//! generation is the only effect, and it is injected (see [`ids::IdSource`]).
//! Presentation, persistence, and export live in other layers that consume
//! the flattened lists and completion flags produced here.

pub mod entities;
pub mod error;
pub mod factory;
pub mod features;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Ability, AbilityCostParams, AbilityDistance, AbilityDistanceType, AbilityEffect,
    AbilityKeyword, AbilityParams, AbilityType, AbilityUsage, Ancestry, BonusParams, Career,
    ChoiceOption, ChoiceParams, ClassAbilityParams, Complication, Culture, DamageModifierParams,
    Domain, DomainChoiceParams, DomainFeatureParams, ElectiveFeatureLevel, Element, Encounter,
    EncounterGroup, EncounterSlot, Feature, FeatureData, FeatureLevel, FeatureType,
    Hero, HeroClass, HeroState, IncidentOptions, Item, Kit, KitChoiceParams, KitDamageBonus,
    KitType, KitTypeParams, LanguageChoiceParams, LanguageDefinition, LanguageParams,
    MinionFilter, Monster, MonsterFilter, MonsterGroup, MonsterRole, MonsterRoleType,
    MonsterSpeed, MultipleParams, Perk, PerkChoiceParams, Playbook, PowerRoll, PowerRollParams,
    PowerRollType, SizeParams, SkillChoiceParams, SkillDefinition, SkillParams, Sourcebook,
    SpeedParams, SubClass, Title, TitleChoiceParams,
};
pub use error::DomainError;
pub use factory::{CultureParams, Factory};
pub use ids::{culture_id, IdSource, SequentialIdSource, UuidIdSource};
pub use value_objects::{
    Characteristic, CharacteristicValue, DamageModifier, DamageModifierType, FeatureField,
    PerkList, Size, SkillList,
};
