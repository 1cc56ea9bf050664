//! Hero statistics that bonus features can modify

use std::fmt;

use serde::{Deserialize, Serialize};

/// A hero statistic targeted by a bonus feature.
///
/// A bonus feature with no explicit name takes the field's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureField {
    Disengage,
    ProjectPoints,
    Recoveries,
    RecoveryValue,
    Renown,
    Speed,
    Stability,
    Stamina,
    Wealth,
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disengage => "Disengage",
            Self::ProjectPoints => "Project Points",
            Self::Recoveries => "Recoveries",
            Self::RecoveryValue => "Recovery Value",
            Self::Renown => "Renown",
            Self::Speed => "Speed",
            Self::Stability => "Stability",
            Self::Stamina => "Stamina",
            Self::Wealth => "Wealth",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_fields_display_with_spaces() {
        assert_eq!(FeatureField::ProjectPoints.to_string(), "Project Points");
        assert_eq!(FeatureField::RecoveryValue.to_string(), "Recovery Value");
    }
}
