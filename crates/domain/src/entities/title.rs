//! Title entity - Earned honors that grant features

use serde::{Deserialize, Serialize};

use super::feature::Feature;

/// A title a hero can earn. Availability is gated by echelon; a chosen title
/// contributes its own features, so title selection recurses during
/// flattening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub id: String,
    pub name: String,
    pub description: String,
    pub echelon: u32,
    pub prerequisites: String,
    pub features: Vec<Feature>,
}
