//! Skill and perk list groupings
//!
//! Skills and perks are grouped into named lists; choice features restrict
//! their options by list rather than enumerating every entry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The list a skill belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillList {
    Crafting,
    Exploration,
    Interpersonal,
    Intrigue,
    Lore,
}

impl SkillList {
    pub const ALL: [SkillList; 5] = [
        SkillList::Crafting,
        SkillList::Exploration,
        SkillList::Interpersonal,
        SkillList::Intrigue,
        SkillList::Lore,
    ];
}

impl fmt::Display for SkillList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Crafting => "Crafting",
            Self::Exploration => "Exploration",
            Self::Interpersonal => "Interpersonal",
            Self::Intrigue => "Intrigue",
            Self::Lore => "Lore",
        };
        write!(f, "{name}")
    }
}

/// The list a perk belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerkList {
    Crafting,
    Exploration,
    Interpersonal,
    Intrigue,
    Lore,
    Supernatural,
}

impl PerkList {
    pub const ALL: [PerkList; 6] = [
        PerkList::Crafting,
        PerkList::Exploration,
        PerkList::Interpersonal,
        PerkList::Intrigue,
        PerkList::Lore,
        PerkList::Supernatural,
    ];
}

impl fmt::Display for PerkList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Crafting => "Crafting",
            Self::Exploration => "Exploration",
            Self::Interpersonal => "Interpersonal",
            Self::Intrigue => "Intrigue",
            Self::Lore => "Lore",
            Self::Supernatural => "Supernatural",
        };
        write!(f, "{name}")
    }
}
