//! Ability entity - Actions, maneuvers, and triggered effects
//!
//! Abilities are granted to heroes and monsters through features. They are
//! data-carrying structs with no invariants to protect; the engine never
//! resolves an ability, it only carries one.

use serde::{Deserialize, Serialize};

use crate::value_objects::Characteristic;

/// How an ability is used in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityUsage {
    Action,
    Maneuver,
    Move,
    Trigger,
    VillainAction,
    NoAction,
    Other,
}

/// Keywords that tag an ability for cost modifiers and interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKeyword {
    Animal,
    Area,
    Attack,
    Charge,
    Earth,
    Fire,
    Green,
    Magic,
    Melee,
    Persistent,
    Psionic,
    Ranged,
    Rot,
    Routine,
    Strike,
    Telekinesis,
    Telepathy,
    Void,
    Weapon,
}

impl AbilityKeyword {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Animal => "Animal",
            Self::Area => "Area",
            Self::Attack => "Attack",
            Self::Charge => "Charge",
            Self::Earth => "Earth",
            Self::Fire => "Fire",
            Self::Green => "Green",
            Self::Magic => "Magic",
            Self::Melee => "Melee",
            Self::Persistent => "Persistent",
            Self::Psionic => "Psionic",
            Self::Ranged => "Ranged",
            Self::Rot => "Rot",
            Self::Routine => "Routine",
            Self::Strike => "Strike",
            Self::Telekinesis => "Telekinesis",
            Self::Telepathy => "Telepathy",
            Self::Void => "Void",
            Self::Weapon => "Weapon",
        }
    }
}

/// How an ability is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityType {
    pub usage: AbilityUsage,
    pub free: bool,
    pub trigger: String,
    pub time: String,
}

impl AbilityType {
    fn with_usage(usage: AbilityUsage, free: bool) -> Self {
        Self {
            usage,
            free,
            trigger: String::new(),
            time: String::new(),
        }
    }

    pub fn action(free: bool) -> Self {
        Self::with_usage(AbilityUsage::Action, free)
    }

    pub fn maneuver(free: bool) -> Self {
        Self::with_usage(AbilityUsage::Maneuver, free)
    }

    pub fn move_action(free: bool) -> Self {
        Self::with_usage(AbilityUsage::Move, free)
    }

    pub fn triggered(trigger: impl Into<String>, free: bool) -> Self {
        Self {
            usage: AbilityUsage::Trigger,
            free,
            trigger: trigger.into(),
            time: String::new(),
        }
    }

    /// An ability that takes a stated amount of downtime (e.g. "1 hour").
    pub fn time(time: impl Into<String>) -> Self {
        Self {
            usage: AbilityUsage::Other,
            free: false,
            trigger: String::new(),
            time: time.into(),
        }
    }

    pub fn villain_action() -> Self {
        Self::with_usage(AbilityUsage::VillainAction, false)
    }

    pub fn no_action() -> Self {
        Self::with_usage(AbilityUsage::NoAction, false)
    }
}

/// The geometry of an ability's reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityDistanceType {
    #[serde(rename = "Self")]
    Self_,
    Melee,
    Ranged,
    Aura,
    Burst,
    Cube,
    Line,
    Wall,
    Special,
}

/// A single distance entry; abilities may carry several (e.g. melee or ranged).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityDistance {
    #[serde(rename = "type")]
    pub distance_type: AbilityDistanceType,
    pub value: u32,
    /// Second dimension for lines (length x width).
    pub value2: u32,
    /// Range within which an area can be placed.
    pub within: u32,
    pub special: String,
}

impl AbilityDistance {
    pub fn new(distance_type: AbilityDistanceType, value: u32, value2: u32, within: u32) -> Self {
        Self {
            distance_type,
            value,
            value2,
            within,
            special: String::new(),
        }
    }

    pub fn self_only() -> Self {
        Self::new(AbilityDistanceType::Self_, 0, 0, 0)
    }

    pub fn melee(value: u32) -> Self {
        Self::new(AbilityDistanceType::Melee, value, 0, 0)
    }

    pub fn ranged(value: u32) -> Self {
        Self::new(AbilityDistanceType::Ranged, value, 0, 0)
    }

    pub fn special(special: impl Into<String>) -> Self {
        Self {
            distance_type: AbilityDistanceType::Special,
            value: 0,
            value2: 0,
            within: 0,
            special: special.into(),
        }
    }
}

/// Which kind of roll an ability calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerRollType {
    PowerRoll,
    Resistance,
}

/// A tiered power roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerRoll {
    #[serde(rename = "type")]
    pub roll_type: PowerRollType,
    pub characteristic: Vec<Characteristic>,
    pub bonus: i32,
    pub tier1: String,
    pub tier2: String,
    pub tier3: String,
}

/// Partial specification for [`PowerRoll::new`]; omitted fields take
/// canonical defaults.
#[derive(Debug, Clone, Default)]
pub struct PowerRollParams {
    pub roll_type: Option<PowerRollType>,
    pub characteristic: Vec<Characteristic>,
    pub bonus: Option<i32>,
    pub tier1: String,
    pub tier2: String,
    pub tier3: String,
}

impl PowerRoll {
    pub fn new(params: PowerRollParams) -> Self {
        Self {
            roll_type: params.roll_type.unwrap_or(PowerRollType::PowerRoll),
            characteristic: params.characteristic,
            bonus: params.bonus.unwrap_or(0),
            tier1: params.tier1,
            tier2: params.tier2,
            tier3: params.tier3,
        }
    }
}

/// An effect bought by spending heroic resource, or sustained by persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEffect {
    pub value: u32,
    pub effect: String,
}

/// An action, maneuver, or triggered effect a creature can use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub ability_type: AbilityType,
    pub keywords: Vec<AbilityKeyword>,
    pub distance: Vec<AbilityDistance>,
    pub target: String,
    pub cost: u32,
    pub pre_effect: String,
    pub power_roll: Option<PowerRoll>,
    pub effect: String,
    pub strained: String,
    pub alternate_effects: Vec<String>,
    pub spend: Vec<AbilityEffect>,
    pub persistence: Vec<AbilityEffect>,
}

/// Partial specification for [`Ability::new`]; omitted fields take canonical
/// defaults (`cost` defaults to 0, meaning a signature ability).
#[derive(Debug, Clone)]
pub struct AbilityParams {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub ability_type: AbilityType,
    pub keywords: Vec<AbilityKeyword>,
    pub distance: Vec<AbilityDistance>,
    pub target: String,
    pub cost: Option<u32>,
    pub pre_effect: Option<String>,
    pub power_roll: Option<PowerRoll>,
    pub effect: Option<String>,
    pub strained: Option<String>,
    pub alternate_effects: Vec<String>,
    pub spend: Vec<AbilityEffect>,
    pub persistence: Vec<AbilityEffect>,
}

impl AbilityParams {
    /// Required fields only; everything else defaults.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        ability_type: AbilityType,
        distance: Vec<AbilityDistance>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            ability_type,
            keywords: Vec::new(),
            distance,
            target: target.into(),
            cost: None,
            pre_effect: None,
            power_roll: None,
            effect: None,
            strained: None,
            alternate_effects: Vec::new(),
            spend: Vec::new(),
            persistence: Vec::new(),
        }
    }
}

impl Ability {
    pub fn new(params: AbilityParams) -> Self {
        Self {
            id: params.id,
            name: params.name,
            description: params.description.unwrap_or_default(),
            ability_type: params.ability_type,
            keywords: params.keywords,
            distance: params.distance,
            target: params.target,
            cost: params.cost.unwrap_or(0),
            pre_effect: params.pre_effect.unwrap_or_default(),
            power_roll: params.power_roll,
            effect: params.effect.unwrap_or_default(),
            strained: params.strained.unwrap_or_default(),
            alternate_effects: params.alternate_effects,
            spend: params.spend,
            persistence: params.persistence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ability_defaults() {
        let ability = Ability::new(AbilityParams::new(
            "ability-bolt",
            "Bolt",
            AbilityType::action(false),
            vec![AbilityDistance::ranged(10)],
            "1 creature",
        ));

        assert_eq!(ability.cost, 0);
        assert_eq!(ability.description, "");
        assert!(ability.power_roll.is_none());
        assert!(ability.spend.is_empty());
    }

    #[test]
    fn power_roll_defaults() {
        let roll = PowerRoll::new(PowerRollParams {
            characteristic: vec![Characteristic::Might],
            tier1: "2 damage".into(),
            tier2: "4 damage".into(),
            tier3: "6 damage".into(),
            ..Default::default()
        });

        assert_eq!(roll.roll_type, PowerRollType::PowerRoll);
        assert_eq!(roll.bonus, 0);
    }

    #[test]
    fn triggered_type_carries_its_trigger() {
        let t = AbilityType::triggered("You take damage", false);
        assert_eq!(t.usage, AbilityUsage::Trigger);
        assert_eq!(t.trigger, "You take damage");
        assert!(!t.free);
    }

    #[test]
    fn distance_conveniences() {
        assert_eq!(AbilityDistance::melee(1).value, 1);
        assert_eq!(
            AbilityDistance::ranged(10).distance_type,
            AbilityDistanceType::Ranged
        );
        assert_eq!(AbilityDistance::special("Line of sight").special, "Line of sight");
    }
}
