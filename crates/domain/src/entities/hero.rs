//! Hero entity - The player character aggregate

use serde::{Deserialize, Serialize};

use super::ancestry::Ancestry;
use super::career::Career;
use super::complication::Complication;
use super::culture::Culture;
use super::feature::Feature;
use super::hero_class::HeroClass;
use super::item::Item;

/// Mutable play-state of a hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HeroState {
    pub stamina_damage: u32,
    pub recoveries_used: u32,
    pub surges: u32,
    pub victories: u32,
    pub xp: u32,
    pub heroic_resource: u32,
    pub hero_tokens: u32,
    pub renown: u32,
    pub wealth: u32,
    pub project_points: u32,
    pub conditions: Vec<String>,
    pub inventory: Vec<Item>,
}

/// A player character. The progression engine only reads this structure;
/// authoring and play flows mutate it and re-run aggregation afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: String,
    pub name: String,
    /// Sourcebooks this hero draws content from
    #[serde(rename = "settingIDs")]
    pub sourcebook_ids: Vec<String>,
    pub ancestry: Option<Ancestry>,
    pub culture: Option<Culture>,
    pub class: Option<HeroClass>,
    pub career: Option<Career>,
    pub complication: Option<Complication>,
    /// Features attached directly to the hero (e.g., the default language)
    pub features: Vec<Feature>,
    pub state: HeroState,
}
