//! Feature aggregation and flattening
//!
//! Each source entity exposes a declared feature list; flattening expands it
//! into the full ordered sequence of features a hero actually has, by
//! descending into resolved choices and unconditional bundles. Traversal is
//! depth-first pre-order: a composite feature is emitted before its
//! children. Un-chosen options are never emitted because they cannot appear
//! in a `selected` container.
//!
//! The feature tree is acyclic by construction (payloads own their children
//! by value); traversal assumes a finite tree and adds no cycle guard.

use crate::entities::{
    Ancestry, Career, Complication, Culture, Feature, FeatureData, HeroClass, Item,
};

/// Expand a declared feature sequence into the flat, ordered list of every
/// feature reachable through resolved selections.
pub fn flatten<'a, I>(features: I) -> Vec<&'a Feature>
where
    I: IntoIterator<Item = &'a Feature>,
{
    let mut list = Vec::new();
    for feature in features {
        push_feature(feature, &mut list);
    }
    list
}

fn push_feature<'a>(feature: &'a Feature, list: &mut Vec<&'a Feature>) {
    list.push(feature);

    match &feature.data {
        FeatureData::Choice(data) => {
            for selected in &data.selected {
                push_feature(selected, list);
            }
        }
        FeatureData::Kit(data) => {
            for kit in &data.selected {
                for child in &kit.features {
                    push_feature(child, list);
                }
            }
        }
        FeatureData::Multiple(data) => {
            for child in &data.features {
                push_feature(child, list);
            }
        }
        FeatureData::Title(data) => {
            for title in &data.selected {
                for child in &title.features {
                    push_feature(child, list);
                }
            }
        }
        // Every other variant is a leaf.
        _ => {}
    }
}

/// All features granted by an ancestry.
pub fn from_ancestry(ancestry: &Ancestry) -> Vec<&Feature> {
    flatten(&ancestry.features)
}

/// All features granted by a culture: environment, organization, upbringing,
/// in that fixed order, skipping empty slots.
pub fn from_culture(culture: &Culture) -> Vec<&Feature> {
    let slots = [
        culture.environment.as_ref(),
        culture.organization.as_ref(),
        culture.upbringing.as_ref(),
    ];
    flatten(slots.into_iter().flatten())
}

/// All features granted by a career.
pub fn from_career(career: &Career) -> Vec<&Feature> {
    flatten(&career.features)
}

/// All features granted by a class at its current level: level-gated class
/// features in ascending level order, then the level-gated features of every
/// selected subclass. Class features precede subclass features regardless of
/// relative level numbers.
pub fn from_class(class: &HeroClass) -> Vec<&Feature> {
    let mut features: Vec<&Feature> = Vec::new();

    for level in &class.features_by_level {
        if level.level <= class.level {
            features.extend(&level.features);
        }
    }

    for subclass in class.subclasses.iter().filter(|sc| sc.selected) {
        for level in &subclass.features_by_level {
            if level.level <= class.level {
                features.extend(&level.features);
            }
        }
    }

    flatten(features)
}

/// All features granted by a complication.
pub fn from_complication(complication: &Complication) -> Vec<&Feature> {
    flatten(&complication.features)
}

/// All features granted by a carried item.
pub fn from_item(item: &Item) -> Vec<&Feature> {
    flatten(&item.features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        ChoiceOption, ChoiceParams, KitChoiceParams, MultipleParams, TitleChoiceParams,
    };
    use crate::factory::{CultureParams, Factory};
    use crate::ids::SequentialIdSource;

    fn test_factory() -> Factory<SequentialIdSource> {
        Factory::with_ids(SequentialIdSource::new("id"))
    }

    fn ids(features: &[&Feature]) -> Vec<String> {
        features.iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn flattening_a_flat_list_is_identity() {
        let features = vec![
            Feature::text("a", "A", ""),
            Feature::text("b", "B", ""),
            Feature::text("c", "C", ""),
        ];
        let flat = flatten(&features);
        assert_eq!(ids(&flat), vec!["a", "b", "c"]);
    }

    #[test]
    fn unselected_choice_options_are_not_emitted() {
        let choice = Feature::choice(ChoiceParams {
            id: "pick".into(),
            options: vec![
                ChoiceOption::new(Feature::text("opt-a", "A", ""), 1),
                ChoiceOption::new(Feature::text("opt-b", "B", ""), 1),
            ],
            ..Default::default()
        });

        let features = vec![choice];
        let flat = flatten(&features);
        assert_eq!(ids(&flat), vec!["pick"]);
    }

    #[test]
    fn resolved_choice_emits_parent_then_selection() {
        let mut choice = Feature::choice(ChoiceParams {
            id: "pick".into(),
            options: vec![ChoiceOption::new(Feature::text("opt-a", "A", ""), 1)],
            ..Default::default()
        });
        if let FeatureData::Choice(data) = &mut choice.data {
            data.selected = vec![Feature::text("opt-a", "A", "")];
        }

        let features = vec![Feature::text("first", "First", ""), choice];
        let flat = flatten(&features);
        assert_eq!(ids(&flat), vec!["first", "pick", "opt-a"]);
    }

    #[test]
    fn multiple_descends_unconditionally_and_recursively() {
        let inner = Feature::multiple(MultipleParams {
            id: "inner".into(),
            features: vec![Feature::text("leaf", "Leaf", "")],
            ..Default::default()
        });
        let outer = Feature::multiple(MultipleParams {
            id: "outer".into(),
            features: vec![inner],
            ..Default::default()
        });

        let features = vec![outer];
        let flat = flatten(&features);
        assert_eq!(ids(&flat), vec!["outer", "inner", "leaf"]);
    }

    #[test]
    fn chosen_kits_and_titles_contribute_their_features() {
        let mut factory = test_factory();

        let mut kit = factory.kit();
        kit.features.push(Feature::text("kit-feature", "Blade Training", ""));
        let mut kit_choice = Feature::kit_choice(KitChoiceParams {
            id: "kit-pick".into(),
            ..Default::default()
        });
        if let FeatureData::Kit(data) = &mut kit_choice.data {
            data.selected.push(kit);
        }

        let mut title = factory.title();
        title.features.push(Feature::text("title-feature", "Local Hero", ""));
        let mut title_choice = Feature::title_choice(TitleChoiceParams {
            id: "title-pick".into(),
            ..Default::default()
        });
        if let FeatureData::Title(data) = &mut title_choice.data {
            data.selected.push(title);
        }

        let features = vec![kit_choice, title_choice];
        let flat = flatten(&features);
        assert_eq!(
            ids(&flat),
            vec!["kit-pick", "kit-feature", "title-pick", "title-feature"]
        );
    }

    #[test]
    fn culture_slots_aggregate_in_fixed_order() {
        let mut factory = test_factory();
        let culture = factory.culture(CultureParams {
            name: Some("Caelian".into()),
            environment: Some(Feature::text("env", "Urban", "")),
            upbringing: Some(Feature::text("up", "Martial", "")),
            ..Default::default()
        });

        // Organization is empty and must simply be skipped.
        let flat = from_culture(&culture);
        assert_eq!(ids(&flat), vec!["env", "up"]);
    }

    #[test]
    fn class_features_are_level_gated() {
        let mut factory = test_factory();
        let mut class = factory.hero_class();
        class.level = 2;
        class.features_by_level[0]
            .features
            .push(Feature::text("l1", "Level 1", ""));
        class.features_by_level[1]
            .features
            .push(Feature::text("l2", "Level 2", ""));
        class.features_by_level[2]
            .features
            .push(Feature::text("l3", "Level 3", ""));

        let flat = from_class(&class);
        assert_eq!(ids(&flat), vec!["l1", "l2"]);
    }

    #[test]
    fn only_selected_subclasses_contribute() {
        let mut factory = test_factory();
        let mut class = factory.hero_class();
        class.features_by_level[0]
            .features
            .push(Feature::text("class-l1", "Class", ""));

        let mut chosen = factory.subclass();
        chosen.selected = true;
        chosen.features_by_level[0]
            .features
            .push(Feature::text("sub-l1", "Chosen", ""));

        let mut ignored = factory.subclass();
        ignored.features_by_level[0]
            .features
            .push(Feature::text("ignored-l1", "Ignored", ""));

        class.subclasses = vec![ignored, chosen];

        let flat = from_class(&class);
        assert_eq!(ids(&flat), vec!["class-l1", "sub-l1"]);
    }

    #[test]
    fn subclass_features_follow_class_features_regardless_of_level() {
        let mut factory = test_factory();
        let mut class = factory.hero_class();
        class.level = 2;
        class.features_by_level[1]
            .features
            .push(Feature::text("class-l2", "Class L2", ""));

        let mut subclass = factory.subclass();
        subclass.selected = true;
        subclass.features_by_level[0]
            .features
            .push(Feature::text("sub-l1", "Sub L1", ""));
        class.subclasses = vec![subclass];

        let flat = from_class(&class);
        assert_eq!(ids(&flat), vec!["class-l2", "sub-l1"]);
    }

    #[test]
    fn verbatim_sources_pass_through_flattening() {
        let mut factory = test_factory();

        let mut ancestry = factory.ancestry();
        ancestry.features.push(Feature::text("a1", "A1", ""));
        assert_eq!(ids(&from_ancestry(&ancestry)), vec!["a1"]);

        let mut career = factory.career();
        career.features.push(Feature::text("c1", "C1", ""));
        assert_eq!(ids(&from_career(&career)), vec!["c1"]);

        let mut complication = factory.complication();
        complication.features.push(Feature::text("x1", "X1", ""));
        assert_eq!(ids(&from_complication(&complication)), vec!["x1"]);

        let mut item = factory.item();
        item.features.push(Feature::text("i1", "I1", ""));
        assert_eq!(ids(&from_item(&item)), vec!["i1"]);
    }
}
