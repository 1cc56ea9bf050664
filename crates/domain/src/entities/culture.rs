//! Culture entity
//!
//! A culture does not carry a feature list; it has three optional named
//! slots (environment, organization, upbringing) that aggregate in that
//! fixed order.

use serde::{Deserialize, Serialize};

use super::feature::Feature;

/// A hero's culture.
///
/// Built-in cultures get deterministic identifiers derived from their name
/// (see [`crate::ids::culture_id`]) so persisted heroes can reference them
/// stably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Culture {
    pub id: String,
    pub name: String,
    pub description: String,
    pub languages: Vec<String>,
    pub environment: Option<Feature>,
    pub organization: Option<Feature>,
    pub upbringing: Option<Feature>,
}
