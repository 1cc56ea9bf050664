//! Sourcebook entity - A named collection of content
//!
//! Sourcebooks hold authored content (official or homebrew); heroes
//! reference them by id to scope what content they may draw from.

use serde::{Deserialize, Serialize};

use super::ancestry::Ancestry;
use super::career::Career;
use super::complication::Complication;
use super::culture::Culture;
use super::domain::Domain;
use super::encounter::Encounter;
use super::hero_class::HeroClass;
use super::item::Item;
use super::kit::Kit;
use super::monster::MonsterGroup;
use super::perk::Perk;
use super::title::Title;
use crate::value_objects::SkillList;

/// A skill row as authored in a sourcebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub name: String,
    pub description: String,
    pub list: SkillList,
}

/// A language row as authored in a sourcebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDefinition {
    pub name: String,
    pub description: String,
}

/// A named collection of content entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sourcebook {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_homebrew: bool,
    pub ancestries: Vec<Ancestry>,
    pub cultures: Vec<Culture>,
    pub careers: Vec<Career>,
    pub classes: Vec<HeroClass>,
    pub domains: Vec<Domain>,
    pub kits: Vec<Kit>,
    pub complications: Vec<Complication>,
    pub perks: Vec<Perk>,
    pub titles: Vec<Title>,
    pub items: Vec<Item>,
    pub monster_groups: Vec<MonsterGroup>,
    pub skills: Vec<SkillDefinition>,
    pub languages: Vec<LanguageDefinition>,
}

/// The director's collection of prepared material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Playbook {
    pub encounters: Vec<Encounter>,
}
