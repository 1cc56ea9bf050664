//! Feature entity - The atomic unit of hero capability
//!
//! A feature pairs identity fields with a closed tagged payload
//! ([`FeatureData`]). Every consumer of the payload matches exhaustively, so
//! adding a variant is a compile-time checklist across the classifier, the
//! completion evaluator, the flattener, and the descriptor table.
//!
//! Choice-bearing payloads share a shape: a `count` of required selections
//! (0 means the choice is optional) and a `selected` container. The engine
//! treats "more selected than count" as complete; capping selections is a UI
//! concern.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ability::{Ability, AbilityKeyword};
use super::domain::Domain;
use super::kit::{Kit, KitType};
use super::perk::Perk;
use super::title::Title;
use crate::error::DomainError;
use crate::value_objects::{DamageModifier, FeatureField, PerkList, Size, SkillList};

/// The discriminant of a feature payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureType {
    Text,
    Ability,
    AbilityCost,
    Bonus,
    Choice,
    ClassAbility,
    DamageModifier,
    Domain,
    DomainFeature,
    Kit,
    KitType,
    Language,
    LanguageChoice,
    Malice,
    Multiple,
    Perk,
    Size,
    Skill,
    SkillChoice,
    Speed,
    Title,
}

impl FeatureType {
    /// Every feature type, in canonical order.
    pub const ALL: [FeatureType; 21] = [
        FeatureType::Text,
        FeatureType::Ability,
        FeatureType::AbilityCost,
        FeatureType::Bonus,
        FeatureType::Choice,
        FeatureType::ClassAbility,
        FeatureType::DamageModifier,
        FeatureType::Domain,
        FeatureType::DomainFeature,
        FeatureType::Kit,
        FeatureType::KitType,
        FeatureType::Language,
        FeatureType::LanguageChoice,
        FeatureType::Malice,
        FeatureType::Multiple,
        FeatureType::Perk,
        FeatureType::Size,
        FeatureType::Skill,
        FeatureType::SkillChoice,
        FeatureType::Speed,
        FeatureType::Title,
    ];

    /// One-sentence explanation of what a feature of this type does.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Text => "This feature has no special properties, just a text description.",
            Self::Ability => "This feature grants you an ability.",
            Self::AbilityCost => "This feature modifies the cost to use an ability.",
            Self::Bonus => "This feature modifies a statistic.",
            Self::Choice => "This feature allows you to choose from a collection of features.",
            Self::ClassAbility => "This feature allows you to choose an ability from your class.",
            Self::DamageModifier => "This feature grants you an immunity or a weakness.",
            Self::Domain => "This feature allows you to choose a domain.",
            Self::DomainFeature => "This feature allows you to choose a feature from your domain.",
            Self::Kit => "This feature allows you to choose a kit.",
            Self::KitType => "This feature changes the types of kit you can select.",
            Self::Language => "This feature grants you a language.",
            Self::LanguageChoice => "This feature allows you to choose a language.",
            Self::Malice => "This feature grants you a malice effect.",
            Self::Multiple => "This feature grants you a collection of features.",
            Self::Perk => "This feature allows you to choose a perk.",
            Self::Size => "This feature sets your size.",
            Self::Skill => "This feature grants you a skill.",
            Self::SkillChoice => "This feature allows you to choose a skill.",
            Self::Speed => "This feature sets your base speed.",
            Self::Title => "This feature allows you to choose a title.",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "Text",
            Self::Ability => "Ability",
            Self::AbilityCost => "Ability Cost",
            Self::Bonus => "Bonus",
            Self::Choice => "Choice",
            Self::ClassAbility => "Class Ability",
            Self::DamageModifier => "Damage Modifier",
            Self::Domain => "Domain",
            Self::DomainFeature => "Domain Feature",
            Self::Kit => "Kit",
            Self::KitType => "Kit Type",
            Self::Language => "Language",
            Self::LanguageChoice => "Language Choice",
            Self::Malice => "Malice",
            Self::Multiple => "Multiple",
            Self::Perk => "Perk",
            Self::Size => "Size",
            Self::Skill => "Skill",
            Self::SkillChoice => "Skill Choice",
            Self::Speed => "Speed",
            Self::Title => "Title",
        };
        write!(f, "{name}")
    }
}

impl FromStr for FeatureType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureType::ALL
            .iter()
            .find(|t| t.to_string() == s)
            .copied()
            .ok_or_else(|| DomainError::parse(format!("unknown feature type: {s}")))
    }
}

/// One option of a [`Choice`](FeatureData::Choice) feature: a nested feature
/// plus the weight it contributes toward the required count (some options
/// count double).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub feature: Feature,
    pub value: u32,
}

impl ChoiceOption {
    pub fn new(feature: Feature, value: u32) -> Self {
        Self { feature, value }
    }
}

/// Payload of an ability-granting feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityData {
    pub ability: Ability,
}

/// Payload of an ability cost modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityCostData {
    pub keywords: Vec<AbilityKeyword>,
    pub modifier: i32,
}

/// Payload of a statistic bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusData {
    pub field: FeatureField,
    pub value: i32,
    pub value_per_level: i32,
    pub value_per_echelon: i32,
}

/// Payload of a weighted choice between nested features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceData {
    pub options: Vec<ChoiceOption>,
    pub count: u32,
    pub selected: Vec<Feature>,
}

/// Payload of a class ability choice; selections are ability identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAbilityData {
    pub cost: u32,
    pub count: u32,
    #[serde(rename = "selectedIDs")]
    pub selected_ids: Vec<String>,
}

/// Payload of an immunity/weakness grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageModifierData {
    pub modifiers: Vec<DamageModifier>,
}

/// Payload of a domain choice; selections are whole domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainData {
    pub count: u32,
    pub selected: Vec<Domain>,
}

/// Payload of a choice among the features a chosen domain offers at a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainFeatureData {
    pub level: u32,
    pub count: u32,
    pub selected: Vec<Feature>,
}

/// Payload of a kit choice; selections are whole kits, each carrying its own
/// features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitData {
    pub types: Vec<KitType>,
    pub count: u32,
    pub selected: Vec<Kit>,
}

/// Payload of a kit type unlock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitTypeData {
    pub types: Vec<KitType>,
}

/// Payload of a language grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageData {
    pub language: String,
}

/// Payload of a language choice; selections are language names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageChoiceData {
    pub options: Vec<String>,
    pub count: u32,
    pub selected: Vec<String>,
}

/// Payload of a monster malice effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaliceData {
    pub cost: u32,
}

/// Payload of an unconditional bundle of features. Unlike a choice, every
/// child is always active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleData {
    pub features: Vec<Feature>,
}

/// Payload of a perk choice; selections are whole perks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerkData {
    pub lists: Vec<PerkList>,
    pub count: u32,
    pub selected: Vec<Perk>,
}

/// Payload of a size grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeData {
    pub size: Size,
}

/// Payload of a skill grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillData {
    pub skill: String,
}

/// Payload of a skill choice; options may be named skills or whole lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillChoiceData {
    pub options: Vec<String>,
    pub list_options: Vec<SkillList>,
    pub count: u32,
    pub selected: Vec<String>,
}

/// Payload of a base speed grant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedData {
    pub speed: u32,
}

/// Payload of a title choice; selections are whole titles, each carrying its
/// own features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleData {
    pub count: u32,
    pub selected: Vec<Title>,
}

/// The closed set of feature payloads. Exactly one shape per feature type;
/// `Text` carries none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum FeatureData {
    Text,
    Ability(AbilityData),
    AbilityCost(AbilityCostData),
    Bonus(BonusData),
    Choice(ChoiceData),
    ClassAbility(ClassAbilityData),
    DamageModifier(DamageModifierData),
    Domain(DomainData),
    DomainFeature(DomainFeatureData),
    Kit(KitData),
    KitType(KitTypeData),
    Language(LanguageData),
    LanguageChoice(LanguageChoiceData),
    Malice(MaliceData),
    Multiple(MultipleData),
    Perk(PerkData),
    Size(SizeData),
    Skill(SkillData),
    SkillChoice(SkillChoiceData),
    Speed(SpeedData),
    Title(TitleData),
}

impl FeatureData {
    /// The discriminant of this payload.
    pub fn feature_type(&self) -> FeatureType {
        match self {
            Self::Text => FeatureType::Text,
            Self::Ability(_) => FeatureType::Ability,
            Self::AbilityCost(_) => FeatureType::AbilityCost,
            Self::Bonus(_) => FeatureType::Bonus,
            Self::Choice(_) => FeatureType::Choice,
            Self::ClassAbility(_) => FeatureType::ClassAbility,
            Self::DamageModifier(_) => FeatureType::DamageModifier,
            Self::Domain(_) => FeatureType::Domain,
            Self::DomainFeature(_) => FeatureType::DomainFeature,
            Self::Kit(_) => FeatureType::Kit,
            Self::KitType(_) => FeatureType::KitType,
            Self::Language(_) => FeatureType::Language,
            Self::LanguageChoice(_) => FeatureType::LanguageChoice,
            Self::Malice(_) => FeatureType::Malice,
            Self::Multiple(_) => FeatureType::Multiple,
            Self::Perk(_) => FeatureType::Perk,
            Self::Size(_) => FeatureType::Size,
            Self::Skill(_) => FeatureType::Skill,
            Self::SkillChoice(_) => FeatureType::SkillChoice,
            Self::Speed(_) => FeatureType::Speed,
            Self::Title(_) => FeatureType::Title,
        }
    }
}

/// An atomic or composite capability a hero possesses.
///
/// `id` is stable within the declaring entity and correlates the feature with
/// its selection state across edits; it is not globally unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub data: FeatureData,
}

impl Feature {
    /// The discriminant of this feature's payload.
    pub fn feature_type(&self) -> FeatureType {
        self.data.feature_type()
    }

    /// Whether this feature represents a choice the user must resolve.
    ///
    /// `Multiple` bundles its children unconditionally, so it is not a
    /// choice.
    pub fn is_choice(&self) -> bool {
        matches!(
            self.data,
            FeatureData::Choice(_)
                | FeatureData::ClassAbility(_)
                | FeatureData::Domain(_)
                | FeatureData::DomainFeature(_)
                | FeatureData::Kit(_)
                | FeatureData::LanguageChoice(_)
                | FeatureData::Perk(_)
                | FeatureData::SkillChoice(_)
                | FeatureData::Title(_)
        )
    }

    /// Whether enough selections have been made to satisfy this feature.
    ///
    /// Non-choice features are vacuously chosen. A weighted choice sums the
    /// weights of the options its selections still resolve to; selections
    /// whose id no longer matches any option contribute zero, so stale data
    /// from upstream edits degrades to "incomplete" instead of failing.
    pub fn is_chosen(&self) -> bool {
        match &self.data {
            FeatureData::Choice(data) => {
                let total: u32 = data
                    .selected
                    .iter()
                    .filter_map(|sel| data.options.iter().find(|opt| opt.feature.id == sel.id))
                    .map(|opt| opt.value)
                    .sum();
                total >= data.count
            }
            FeatureData::ClassAbility(data) => data.selected_ids.len() as u32 >= data.count,
            FeatureData::Domain(data) => data.selected.len() as u32 >= data.count,
            FeatureData::DomainFeature(data) => data.selected.len() as u32 >= data.count,
            FeatureData::Kit(data) => data.selected.len() as u32 >= data.count,
            FeatureData::LanguageChoice(data) => data.selected.len() as u32 >= data.count,
            FeatureData::Perk(data) => data.selected.len() as u32 >= data.count,
            FeatureData::SkillChoice(data) => data.selected.len() as u32 >= data.count,
            FeatureData::Title(data) => data.selected.len() as u32 >= data.count,
            _ => true,
        }
    }
}

fn choose_n(count: u32, singular: &str, plural: &str) -> String {
    if count > 1 {
        format!("Choose {count} {plural}.")
    } else {
        format!("Choose {singular}.")
    }
}

/// Partial specification for [`Feature::ability_cost`].
#[derive(Debug, Clone, Default)]
pub struct AbilityCostParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<AbilityKeyword>,
    pub modifier: i32,
}

/// Partial specification for [`Feature::bonus`].
#[derive(Debug, Clone)]
pub struct BonusParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub field: FeatureField,
    pub value: Option<i32>,
    pub value_per_level: Option<i32>,
    pub value_per_echelon: Option<i32>,
}

impl BonusParams {
    pub fn new(id: impl Into<String>, field: FeatureField) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            field,
            value: None,
            value_per_level: None,
            value_per_echelon: None,
        }
    }
}

/// Partial specification for [`Feature::choice`].
#[derive(Debug, Clone, Default)]
pub struct ChoiceParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub options: Vec<ChoiceOption>,
    pub count: Option<u32>,
}

/// Partial specification for [`Feature::class_ability`].
#[derive(Debug, Clone, Default)]
pub struct ClassAbilityParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: u32,
    pub count: Option<u32>,
}

/// Partial specification for [`Feature::damage_modifier`].
#[derive(Debug, Clone, Default)]
pub struct DamageModifierParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub modifiers: Vec<DamageModifier>,
}

/// Partial specification for [`Feature::domain_choice`].
#[derive(Debug, Clone, Default)]
pub struct DomainChoiceParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub count: Option<u32>,
}

/// Partial specification for [`Feature::domain_feature_choice`].
#[derive(Debug, Clone, Default)]
pub struct DomainFeatureParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub level: u32,
    pub count: Option<u32>,
}

/// Partial specification for [`Feature::kit_choice`].
#[derive(Debug, Clone, Default)]
pub struct KitChoiceParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub types: Vec<KitType>,
    pub count: Option<u32>,
}

/// Partial specification for [`Feature::kit_type`].
#[derive(Debug, Clone, Default)]
pub struct KitTypeParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub types: Vec<KitType>,
}

/// Partial specification for [`Feature::language`].
#[derive(Debug, Clone, Default)]
pub struct LanguageParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: String,
}

/// Partial specification for [`Feature::language_choice`].
#[derive(Debug, Clone, Default)]
pub struct LanguageChoiceParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub options: Vec<String>,
    pub count: Option<u32>,
    pub selected: Vec<String>,
}

/// Partial specification for [`Feature::multiple`].
#[derive(Debug, Clone, Default)]
pub struct MultipleParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub features: Vec<Feature>,
}

/// Partial specification for [`Feature::perk_choice`].
#[derive(Debug, Clone, Default)]
pub struct PerkChoiceParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Defaults to every perk list.
    pub lists: Option<Vec<PerkList>>,
    pub count: Option<u32>,
}

/// Partial specification for [`Feature::size`].
#[derive(Debug, Clone, Default)]
pub struct SizeParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub size_value: u32,
    pub size_mod: String,
}

/// Partial specification for [`Feature::skill`].
#[derive(Debug, Clone, Default)]
pub struct SkillParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub skill: String,
}

/// Partial specification for [`Feature::skill_choice`].
#[derive(Debug, Clone, Default)]
pub struct SkillChoiceParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub options: Vec<String>,
    pub list_options: Vec<SkillList>,
    pub count: Option<u32>,
    pub selected: Vec<String>,
}

/// Partial specification for [`Feature::speed`].
#[derive(Debug, Clone, Default)]
pub struct SpeedParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub speed: u32,
}

/// Partial specification for [`Feature::title_choice`].
#[derive(Debug, Clone, Default)]
pub struct TitleChoiceParams {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub count: Option<u32>,
}

/// Constructors, one per variant, with canonical defaults for every omitted
/// optional field.
impl Feature {
    /// A plain text feature.
    pub fn text(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            data: FeatureData::Text,
        }
    }

    /// An ability grant; identity fields mirror the ability's.
    pub fn ability(ability: Ability) -> Self {
        Self {
            id: ability.id.clone(),
            name: ability.name.clone(),
            description: ability.description.clone(),
            data: FeatureData::Ability(AbilityData { ability }),
        }
    }

    pub fn ability_cost(params: AbilityCostParams) -> Self {
        let keywords = params
            .keywords
            .iter()
            .map(|k| k.display_name())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| format!("{keywords} cost modifier")),
            description: params.description.unwrap_or_default(),
            data: FeatureData::AbilityCost(AbilityCostData {
                keywords: params.keywords,
                modifier: params.modifier,
            }),
        }
    }

    pub fn bonus(params: BonusParams) -> Self {
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| params.field.to_string()),
            description: params.description.unwrap_or_default(),
            data: FeatureData::Bonus(BonusData {
                field: params.field,
                value: params.value.unwrap_or(0),
                value_per_level: params.value_per_level.unwrap_or(0),
                value_per_echelon: params.value_per_echelon.unwrap_or(0),
            }),
        }
    }

    pub fn choice(params: ChoiceParams) -> Self {
        let count = params.count.unwrap_or(1);
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| "Choice".into()),
            description: params
                .description
                .unwrap_or_else(|| choose_n(count, "an option", "options")),
            data: FeatureData::Choice(ChoiceData {
                options: params.options,
                count,
                selected: Vec::new(),
            }),
        }
    }

    pub fn class_ability(params: ClassAbilityParams) -> Self {
        let count = params.count.unwrap_or(1);
        let description = params.description.unwrap_or_else(|| {
            let kind = if params.cost == 0 {
                "signature".to_string()
            } else {
                format!("{}pt", params.cost)
            };
            if count > 1 {
                format!("Choose {count} {kind} abilities.")
            } else {
                format!("Choose a {kind} ability.")
            }
        });
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| "Ability".into()),
            description,
            data: FeatureData::ClassAbility(ClassAbilityData {
                cost: params.cost,
                count,
                selected_ids: Vec::new(),
            }),
        }
    }

    pub fn damage_modifier(params: DamageModifierParams) -> Self {
        let description = params.description.unwrap_or_else(|| {
            params
                .modifiers
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        });
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| "Damage Modifier".into()),
            description,
            data: FeatureData::DamageModifier(DamageModifierData {
                modifiers: params.modifiers,
            }),
        }
    }

    pub fn domain_choice(params: DomainChoiceParams) -> Self {
        let count = params.count.unwrap_or(1);
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| "Domain".into()),
            description: params
                .description
                .unwrap_or_else(|| choose_n(count, "a domain", "domains")),
            data: FeatureData::Domain(DomainData {
                count,
                selected: Vec::new(),
            }),
        }
    }

    pub fn domain_feature_choice(params: DomainFeatureParams) -> Self {
        let count = params.count.unwrap_or(1);
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| "Domain Feature Choice".into()),
            description: params
                .description
                .unwrap_or_else(|| choose_n(count, "an option", "options")),
            data: FeatureData::DomainFeature(DomainFeatureData {
                level: params.level,
                count,
                selected: Vec::new(),
            }),
        }
    }

    pub fn kit_choice(params: KitChoiceParams) -> Self {
        let count = params.count.unwrap_or(1);
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| "Kit".into()),
            description: params
                .description
                .unwrap_or_else(|| choose_n(count, "a kit", "kits")),
            data: FeatureData::Kit(KitData {
                types: params.types,
                count,
                selected: Vec::new(),
            }),
        }
    }

    pub fn kit_type(params: KitTypeParams) -> Self {
        let description = params.description.unwrap_or_else(|| {
            let types = params
                .types
                .iter()
                .map(|t| t.display_name())
                .collect::<Vec<_>>()
                .join(", ");
            format!("Allow {types} kits.")
        });
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| "Kit Type".into()),
            description,
            data: FeatureData::KitType(KitTypeData {
                types: params.types,
            }),
        }
    }

    pub fn language(params: LanguageParams) -> Self {
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| params.language.clone()),
            description: params.description.unwrap_or_default(),
            data: FeatureData::Language(LanguageData {
                language: params.language,
            }),
        }
    }

    pub fn language_choice(params: LanguageChoiceParams) -> Self {
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| "Language".into()),
            description: params.description.unwrap_or_default(),
            data: FeatureData::LanguageChoice(LanguageChoiceData {
                options: params.options,
                count: params.count.unwrap_or(1),
                selected: params.selected,
            }),
        }
    }

    /// A malice effect; all fields are required.
    pub fn malice(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        cost: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            data: FeatureData::Malice(MaliceData { cost }),
        }
    }

    pub fn multiple(params: MultipleParams) -> Self {
        let name = params.name.unwrap_or_else(|| {
            params
                .features
                .iter()
                .map(|f| {
                    if f.name.is_empty() {
                        "Unnamed Feature"
                    } else {
                        f.name.as_str()
                    }
                })
                .collect::<Vec<_>>()
                .join(", ")
        });
        Self {
            id: params.id,
            name,
            description: params.description.unwrap_or_default(),
            data: FeatureData::Multiple(MultipleData {
                features: params.features,
            }),
        }
    }

    pub fn perk_choice(params: PerkChoiceParams) -> Self {
        let count = params.count.unwrap_or(1);
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| "Perk".into()),
            description: params
                .description
                .unwrap_or_else(|| choose_n(count, "a perk", "perks")),
            data: FeatureData::Perk(PerkData {
                lists: params.lists.unwrap_or_else(|| PerkList::ALL.to_vec()),
                count,
                selected: Vec::new(),
            }),
        }
    }

    pub fn size(params: SizeParams) -> Self {
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| "Size".into()),
            description: params.description.unwrap_or_default(),
            data: FeatureData::Size(SizeData {
                size: Size::new(params.size_value, params.size_mod),
            }),
        }
    }

    pub fn skill(params: SkillParams) -> Self {
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| params.skill.clone()),
            description: params.description.unwrap_or_default(),
            data: FeatureData::Skill(SkillData {
                skill: params.skill,
            }),
        }
    }

    pub fn skill_choice(params: SkillChoiceParams) -> Self {
        let count = params.count.unwrap_or(1);
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| {
                let name = if count > 1 { "Skills" } else { "Skill" };
                name.into()
            }),
            description: params.description.unwrap_or_default(),
            data: FeatureData::SkillChoice(SkillChoiceData {
                options: params.options,
                list_options: params.list_options,
                count,
                selected: params.selected,
            }),
        }
    }

    pub fn speed(params: SpeedParams) -> Self {
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| "Speed".into()),
            description: params.description.unwrap_or_default(),
            data: FeatureData::Speed(SpeedData {
                speed: params.speed,
            }),
        }
    }

    pub fn title_choice(params: TitleChoiceParams) -> Self {
        let count = params.count.unwrap_or(1);
        Self {
            id: params.id,
            name: params.name.unwrap_or_else(|| "Title".into()),
            description: params
                .description
                .unwrap_or_else(|| choose_n(count, "a title", "titles")),
            data: FeatureData::Title(TitleData {
                count,
                selected: Vec::new(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_choice() -> Feature {
        Feature::choice(ChoiceParams {
            id: "pick-two".into(),
            options: vec![
                ChoiceOption::new(Feature::text("opt-a", "A", ""), 1),
                ChoiceOption::new(Feature::text("opt-b", "B", ""), 2),
            ],
            count: Some(2),
            ..Default::default()
        })
    }

    #[test]
    fn non_choice_types_are_vacuously_chosen() {
        let text = Feature::text("f1", "Flavor", "Just words");
        assert!(!text.is_choice());
        assert!(text.is_chosen());

        let multiple = Feature::multiple(MultipleParams {
            id: "bundle".into(),
            features: vec![Feature::text("c1", "Child", "")],
            ..Default::default()
        });
        assert!(!multiple.is_choice());
        assert!(multiple.is_chosen());
    }

    #[test]
    fn choice_set_classification() {
        let choice = weighted_choice();
        assert!(choice.is_choice());

        let kit = Feature::kit_choice(KitChoiceParams {
            id: "kit".into(),
            ..Default::default()
        });
        assert!(kit.is_choice());

        let title = Feature::title_choice(TitleChoiceParams {
            id: "title".into(),
            ..Default::default()
        });
        assert!(title.is_choice());
    }

    #[test]
    fn weighted_option_can_satisfy_count_alone() {
        let mut choice = weighted_choice();

        // Nothing selected yet.
        assert!(!choice.is_chosen());

        // A weighs 1 of the required 2.
        if let FeatureData::Choice(data) = &mut choice.data {
            data.selected = vec![Feature::text("opt-a", "A", "")];
        }
        assert!(!choice.is_chosen());

        // B alone weighs 2.
        if let FeatureData::Choice(data) = &mut choice.data {
            data.selected = vec![Feature::text("opt-b", "B", "")];
        }
        assert!(choice.is_chosen());
    }

    #[test]
    fn stale_selection_contributes_zero() {
        let mut choice = weighted_choice();
        if let FeatureData::Choice(data) = &mut choice.data {
            data.selected = vec![Feature::text("opt-gone", "Removed option", "")];
        }
        assert!(!choice.is_chosen());
    }

    #[test]
    fn selection_count_variants_compare_against_count() {
        let mut langs = Feature::language_choice(LanguageChoiceParams {
            id: "langs".into(),
            count: Some(2),
            ..Default::default()
        });
        assert!(!langs.is_chosen());

        if let FeatureData::LanguageChoice(data) = &mut langs.data {
            data.selected = vec!["Caelian".into(), "Hyrallic".into()];
        }
        assert!(langs.is_chosen());

        // Over-selection still counts as complete.
        if let FeatureData::LanguageChoice(data) = &mut langs.data {
            data.selected.push("Khelt".into());
        }
        assert!(langs.is_chosen());
    }

    #[test]
    fn zero_count_choice_is_complete_without_selections() {
        let skill = Feature::skill_choice(SkillChoiceParams {
            id: "optional-skill".into(),
            count: Some(0),
            ..Default::default()
        });
        assert!(skill.is_chosen());
    }

    #[test]
    fn choice_description_defaults() {
        let one = Feature::choice(ChoiceParams {
            id: "one".into(),
            ..Default::default()
        });
        assert_eq!(one.description, "Choose an option.");
        if let FeatureData::Choice(data) = &one.data {
            assert_eq!(data.count, 1);
        } else {
            panic!("expected a choice payload");
        }

        let three = Feature::choice(ChoiceParams {
            id: "three".into(),
            count: Some(3),
            ..Default::default()
        });
        assert_eq!(three.description, "Choose 3 options.");
    }

    #[test]
    fn class_ability_description_defaults() {
        let signature = Feature::class_ability(ClassAbilityParams {
            id: "sig".into(),
            cost: 0,
            ..Default::default()
        });
        assert_eq!(signature.description, "Choose a signature ability.");

        let costed = Feature::class_ability(ClassAbilityParams {
            id: "costed".into(),
            cost: 5,
            count: Some(2),
            ..Default::default()
        });
        assert_eq!(costed.description, "Choose 2 5pt abilities.");
    }

    #[test]
    fn bonus_name_defaults_to_field() {
        let bonus = Feature::bonus(BonusParams::new("b1", FeatureField::RecoveryValue));
        assert_eq!(bonus.name, "Recovery Value");
        if let FeatureData::Bonus(data) = &bonus.data {
            assert_eq!(data.value, 0);
            assert_eq!(data.value_per_echelon, 0);
        } else {
            panic!("expected a bonus payload");
        }
    }

    #[test]
    fn multiple_name_joins_children() {
        let bundle = Feature::multiple(MultipleParams {
            id: "bundle".into(),
            features: vec![
                Feature::text("a", "Iron Will", ""),
                Feature::text("b", "", ""),
            ],
            ..Default::default()
        });
        assert_eq!(bundle.name, "Iron Will, Unnamed Feature");
    }

    #[test]
    fn perk_lists_default_to_all() {
        let perk = Feature::perk_choice(PerkChoiceParams {
            id: "perk".into(),
            ..Default::default()
        });
        if let FeatureData::Perk(data) = &perk.data {
            assert_eq!(data.lists, PerkList::ALL.to_vec());
        } else {
            panic!("expected a perk payload");
        }
    }

    #[test]
    fn descriptor_is_defined_for_every_type() {
        for feature_type in FeatureType::ALL {
            assert!(!feature_type.description().is_empty());
        }
    }

    #[test]
    fn type_names_round_trip() {
        for feature_type in FeatureType::ALL {
            let parsed: FeatureType = feature_type.to_string().parse().unwrap();
            assert_eq!(parsed, feature_type);
        }
        assert!("Widget".parse::<FeatureType>().is_err());
    }

    #[test]
    fn wire_shape_is_adjacently_tagged() {
        let skill = Feature::skill(SkillParams {
            id: "s1".into(),
            skill: "Climb".into(),
            ..Default::default()
        });
        let json = serde_json::to_value(&skill).unwrap();
        assert_eq!(json["type"], "skill");
        assert_eq!(json["data"]["skill"], "Climb");
        assert_eq!(json["name"], "Climb");

        // Text carries no payload at all.
        let text = Feature::text("t1", "Lore", "Some lore.");
        let json = serde_json::to_value(&text).unwrap();
        assert_eq!(json["type"], "text");
        assert!(json.get("data").is_none());

        let back: Feature = serde_json::from_value(json).unwrap();
        assert_eq!(back, text);
    }
}
