//! Perk entity - Small feature-shaped capabilities grouped into lists

use serde::{Deserialize, Serialize};

use super::feature::FeatureData;
use crate::value_objects::PerkList;

/// A perk: feature-shaped (it carries a feature payload) plus the list it is
/// drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perk {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub data: FeatureData,
    pub list: PerkList,
}
