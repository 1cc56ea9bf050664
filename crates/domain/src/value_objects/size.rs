//! Creature size

use std::fmt;

use serde::{Deserialize, Serialize};

/// A creature's size: a numeric band plus a letter modifier for size-1
/// creatures (T/S/M/L).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub value: u32,
    #[serde(rename = "mod")]
    pub modifier: String,
}

impl Size {
    pub fn new(value: u32, modifier: impl Into<String>) -> Self {
        Self {
            value,
            modifier: modifier.into(),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(1, "M")
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_concatenates_value_and_modifier() {
        assert_eq!(Size::new(1, "S").to_string(), "1S");
        assert_eq!(Size::new(2, "").to_string(), "2");
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(Size::default().to_string(), "1M");
    }
}
