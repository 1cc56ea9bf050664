//! Monster entities - Monsters, their groups, and the library filter

use serde::{Deserialize, Serialize};

use super::feature::Feature;
use crate::value_objects::{CharacteristicValue, Size};

/// Battlefield role of a monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MonsterRoleType {
    #[default]
    Ambusher,
    Artillery,
    Brute,
    Controller,
    Defender,
    Harrier,
    Hexer,
    Mount,
    Support,
}

/// A monster's role, including whether it fights as a minion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MonsterRole {
    #[serde(rename = "type")]
    pub role_type: MonsterRoleType,
    pub is_minion: bool,
}

/// Movement value plus special modes ("fly, climb").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSpeed {
    pub value: u32,
    pub modes: String,
}

/// A monster stat block. Malice features live on the group, not the monster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: u32,
    pub role: MonsterRole,
    pub keywords: Vec<String>,
    pub encounter_value: u32,
    pub size: Size,
    pub speed: MonsterSpeed,
    pub stamina: u32,
    pub stability: u32,
    pub free_strike_damage: u32,
    pub characteristics: Vec<CharacteristicValue>,
    pub features: Vec<Feature>,
}

/// A themed group of monsters sharing lore and malice features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Lore entries shown alongside the group
    pub information: Vec<Feature>,
    /// Malice features shared by the whole group
    pub malice: Vec<Feature>,
    pub monsters: Vec<Monster>,
}

/// Tri-state minion filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum MinionFilter {
    #[default]
    Any,
    Yes,
    No,
}

/// Search filter over the monster library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterFilter {
    pub name: String,
    pub roles: Vec<MonsterRoleType>,
    pub is_minion: MinionFilter,
    /// Inclusive level range
    pub level: [u32; 2],
    /// Inclusive encounter-value range
    pub ev: [u32; 2],
}

impl Default for MonsterFilter {
    fn default() -> Self {
        Self {
            name: String::new(),
            roles: Vec::new(),
            is_minion: MinionFilter::Any,
            level: [1, 20],
            ev: [0, 500],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_cover_the_whole_library() {
        let filter = MonsterFilter::default();
        assert_eq!(filter.level, [1, 20]);
        assert_eq!(filter.ev, [0, 500]);
        assert_eq!(filter.is_minion, MinionFilter::Any);
        assert!(filter.roles.is_empty());
    }
}
