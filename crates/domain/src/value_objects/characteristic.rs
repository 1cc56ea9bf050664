//! The five hero characteristics

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A hero characteristic (ability score).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Characteristic {
    Might,
    Agility,
    Reason,
    Intuition,
    Presence,
}

impl Characteristic {
    /// All characteristics in canonical display order.
    pub const ALL: [Characteristic; 5] = [
        Characteristic::Might,
        Characteristic::Agility,
        Characteristic::Reason,
        Characteristic::Intuition,
        Characteristic::Presence,
    ];
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Might => "Might",
            Self::Agility => "Agility",
            Self::Reason => "Reason",
            Self::Intuition => "Intuition",
            Self::Presence => "Presence",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Characteristic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Might" => Ok(Self::Might),
            "Agility" => Ok(Self::Agility),
            "Reason" => Ok(Self::Reason),
            "Intuition" => Ok(Self::Intuition),
            "Presence" => Ok(Self::Presence),
            _ => Err(DomainError::parse(format!("unknown characteristic: {s}"))),
        }
    }
}

/// A characteristic paired with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicValue {
    pub characteristic: Characteristic,
    pub value: i32,
}

impl CharacteristicValue {
    pub fn new(characteristic: Characteristic, value: i32) -> Self {
        Self {
            characteristic,
            value,
        }
    }

    /// One zeroed entry per characteristic, in canonical order.
    pub fn zeroed() -> Vec<CharacteristicValue> {
        Characteristic::ALL
            .iter()
            .map(|c| CharacteristicValue::new(*c, 0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_through_from_str() {
        for c in Characteristic::ALL {
            assert_eq!(c.to_string().parse::<Characteristic>(), Ok(c));
        }
    }

    #[test]
    fn unknown_name_is_a_parse_error() {
        let err = "Luck".parse::<Characteristic>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn zeroed_covers_all_five() {
        let values = CharacteristicValue::zeroed();
        assert_eq!(values.len(), 5);
        assert!(values.iter().all(|v| v.value == 0));
        assert_eq!(values[0].characteristic, Characteristic::Might);
    }
}
