//! Domain value objects - Immutable values without identity

mod characteristic;
mod damage;
mod field;
mod lists;
mod size;

pub use characteristic::{Characteristic, CharacteristicValue};
pub use damage::{DamageModifier, DamageModifierType};
pub use field::FeatureField;
pub use lists::{PerkList, SkillList};
pub use size::Size;
