//! Complication entity

use serde::{Deserialize, Serialize};

use super::feature::Feature;

/// An optional complication; contributes its feature list verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complication {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: Vec<Feature>,
}
