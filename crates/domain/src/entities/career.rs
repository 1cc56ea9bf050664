//! Career entity

use serde::{Deserialize, Serialize};

use super::feature::Feature;

/// A narrative element: an identified name/description pair used for
/// inciting incidents and similar pick-one lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A pick-one list of narrative elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IncidentOptions {
    pub options: Vec<Element>,
    #[serde(rename = "selectedID")]
    pub selected_id: Option<String>,
}

/// A hero's career before heroing; contributes its feature list verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: Vec<Feature>,
    pub inciting_incidents: IncidentOptions,
}
