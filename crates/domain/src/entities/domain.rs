//! Domain entity - Deity domains for conduit-style classes

use serde::{Deserialize, Serialize};

use super::hero_class::ElectiveFeatureLevel;

/// A deity domain. Its features are keyed by level; a domain-feature choice
/// draws from the `optional_features` of the matching level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features_by_level: Vec<ElectiveFeatureLevel>,
}
