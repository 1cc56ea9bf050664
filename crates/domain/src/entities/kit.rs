//! Kit entity - Equipment packages that grant stats and features

use serde::{Deserialize, Serialize};

use super::feature::Feature;

/// The category of a kit; some features restrict which categories a hero may
/// select from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum KitType {
    #[default]
    Standard,
    Stormwight,
}

impl KitType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Stormwight => "Stormwight",
        }
    }
}

/// Tiered damage bonus granted by a kit's weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitDamageBonus {
    pub tier1: u32,
    pub tier2: u32,
    pub tier3: u32,
}

/// An equipment package. A chosen kit contributes its own features to the
/// hero, so kit selection recurses during flattening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kit {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kit_type: KitType,
    pub armor: Vec<String>,
    pub weapon: Vec<String>,
    pub stamina: u32,
    pub speed: u32,
    pub stability: u32,
    pub melee_damage: Option<KitDamageBonus>,
    pub ranged_damage: Option<KitDamageBonus>,
    pub melee_distance: u32,
    pub ranged_distance: u32,
    pub disengage: u32,
    pub features: Vec<Feature>,
}
