//! Damage immunities and weaknesses

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a damage modifier protects from or worsens damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageModifierType {
    Immunity,
    Weakness,
}

impl fmt::Display for DamageModifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immunity => write!(f, "immunity"),
            Self::Weakness => write!(f, "weakness"),
        }
    }
}

/// An immunity or weakness to a damage type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageModifier {
    /// Damage type the modifier applies to (e.g., "Fire", "Corruption")
    pub damage_type: String,
    #[serde(rename = "type")]
    pub modifier_type: DamageModifierType,
    pub value: i32,
    pub value_per_level: i32,
}

impl DamageModifier {
    pub fn immunity(damage_type: impl Into<String>, value: i32) -> Self {
        Self {
            damage_type: damage_type.into(),
            modifier_type: DamageModifierType::Immunity,
            value,
            value_per_level: 0,
        }
    }

    pub fn weakness(damage_type: impl Into<String>, value: i32) -> Self {
        Self {
            damage_type: damage_type.into(),
            modifier_type: DamageModifierType::Weakness,
            value,
            value_per_level: 0,
        }
    }
}

// Display is the short form used when a damage-modifier feature synthesizes
// its own description, e.g. "Fire immunity 5".
impl fmt::Display for DamageModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.damage_type, self.modifier_type, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_short_form() {
        assert_eq!(DamageModifier::immunity("Fire", 5).to_string(), "Fire immunity 5");
        assert_eq!(
            DamageModifier::weakness("Holy", 3).to_string(),
            "Holy weakness 3"
        );
    }

    #[test]
    fn constructors_leave_per_level_at_zero() {
        assert_eq!(DamageModifier::immunity("Cold", 2).value_per_level, 0);
    }
}
