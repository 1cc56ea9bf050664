//! Item entity

use serde::{Deserialize, Serialize};

use super::feature::Feature;

/// A carried item; contributes its feature list verbatim while held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: Vec<Feature>,
    pub count: u32,
}
