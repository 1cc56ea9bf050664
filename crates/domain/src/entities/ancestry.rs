//! Ancestry entity

use serde::{Deserialize, Serialize};

use super::feature::Feature;

/// A hero's ancestry; contributes its feature list verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ancestry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: Vec<Feature>,
}
