//! Class and subclass entities
//!
//! Class features are keyed by level. Aggregation walks every
//! `features_by_level` record whose level is within the class's current
//! level, then repeats the walk for each selected subclass; class features
//! always precede subclass features.

use serde::{Deserialize, Serialize};

use super::ability::Ability;
use super::feature::Feature;
use crate::value_objects::{Characteristic, CharacteristicValue};

/// The features a class grants at one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FeatureLevel {
    pub level: u32,
    pub features: Vec<Feature>,
}

impl FeatureLevel {
    pub fn new(level: u32) -> Self {
        Self {
            level,
            features: Vec::new(),
        }
    }
}

/// The features a subclass or domain grants at one level, plus the elective
/// pool that domain-feature choices draw from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ElectiveFeatureLevel {
    pub level: u32,
    pub features: Vec<Feature>,
    pub optional_features: Vec<Feature>,
}

impl ElectiveFeatureLevel {
    pub fn new(level: u32) -> Self {
        Self {
            level,
            features: Vec::new(),
            optional_features: Vec::new(),
        }
    }
}

/// A subclass. Only subclasses flagged `selected` contribute features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubClass {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features_by_level: Vec<ElectiveFeatureLevel>,
    pub selected: bool,
}

/// A hero class at a particular level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroClass {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Name of the class's heroic resource (e.g., "Ferocity")
    pub heroic_resource: String,
    /// What this class calls its subclasses (e.g., "Aspect")
    pub subclass_name: String,
    /// How many subclasses a hero of this class picks
    pub subclass_count: u32,
    pub primary_characteristics: Vec<Characteristic>,
    pub features_by_level: Vec<FeatureLevel>,
    pub abilities: Vec<Ability>,
    pub subclasses: Vec<SubClass>,
    /// The hero's current level in this class
    pub level: u32,
    /// The hero's characteristic array once assigned
    pub characteristics: Vec<CharacteristicValue>,
}
