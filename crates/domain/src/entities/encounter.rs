//! Encounter entities

use serde::{Deserialize, Serialize};

/// One monster entry in an encounter group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterSlot {
    pub id: String,
    #[serde(rename = "monsterID")]
    pub monster_id: String,
    pub count: u32,
}

/// Monsters that act together in an encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterGroup {
    pub id: String,
    pub slots: Vec<EncounterSlot>,
}

/// A planned encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub id: String,
    pub name: String,
    pub description: String,
    pub groups: Vec<EncounterGroup>,
}
