//! Feature headers, backgrounds, descriptions and tags.

use gherkin_ast::{Location, ScenarioDefinition, StepArgument, Tag};
use gherkin_ast_builder::{RuleKind, TokenKind};

use crate::script::{
    Script, background_line, feature_line, other, scenario_line, step_line, table_row, tag_line,
};

fn header(name: &'static str) -> impl FnOnce(Script) -> Script {
    move |s| s.leaf(feature_line(1, name))
}

#[test]
fn feature_without_scenarios_has_empty_definitions_and_no_background() {
    let feature = Script::new()
        .rule(RuleKind::Feature, |s| {
            s.rule(RuleKind::FeatureHeader, header("Nothing yet"))
                .leaf(gherkin_ast_builder::Token::new(
                    TokenKind::Eof,
                    Location::new(2, 1),
                ))
        })
        .reduce();

    assert_eq!(feature.name, "Nothing yet");
    assert_eq!(feature.keyword, "Feature");
    assert_eq!(feature.location, Location::new(1, 1));
    assert_eq!(feature.language, "en");
    assert_eq!(feature.description, "");
    assert!(feature.tags.is_empty());
    assert!(feature.background().is_none());
    assert!(feature.scenario_definitions().is_empty());
}

#[test]
fn one_scenario_with_plain_step_and_two_by_two_table() {
    let feature = Script::new()
        .rule(RuleKind::Feature, |s| {
            s.rule(RuleKind::FeatureHeader, header("Checkout"))
                .rule(RuleKind::ScenarioDefinition, |s| {
                    s.rule(RuleKind::Scenario, |s| {
                        s.leaf(scenario_line(3, "pay by card"))
                            .rule(RuleKind::Step, |s| s.leaf(step_line(4, "Given ", "a full cart")))
                            .rule(RuleKind::Step, |s| {
                                s.leaf(step_line(5, "When ", "I pay with"))
                                    .rule(RuleKind::DataTable, |s| {
                                        s.leaf(table_row(6, &[(9, "card"), (16, "amount")]))
                                            .leaf(table_row(7, &[(9, "visa"), (16, "12.50")]))
                                    })
                            })
                    })
                })
        })
        .reduce();

    let [ScenarioDefinition::Scenario(scenario)] = feature.scenario_definitions() else {
        panic!("expected exactly one scenario");
    };
    assert_eq!(scenario.location, Location::new(3, 3));
    assert_eq!(scenario.name, "pay by card");

    let [plain, tabled] = scenario.steps.as_slice() else {
        panic!("expected two steps, got {}", scenario.steps.len());
    };
    assert_eq!(plain.location, Location::new(4, 5));
    assert_eq!(plain.keyword, "Given ");
    assert_eq!(plain.text, "a full cart");
    assert_eq!(plain.argument, StepArgument::Empty);

    assert_eq!(tabled.location, Location::new(5, 5));
    let Some(table) = tabled.data_table() else {
        panic!("expected a data table argument");
    };
    let [first, second] = table.rows.as_slice() else {
        panic!("expected two rows, got {}", table.rows.len());
    };
    assert_eq!(first.location, Location::new(6, 7));
    assert_eq!(second.location, Location::new(7, 7));
    let first_locations: Vec<_> = first.cells.iter().map(|cell| cell.location).collect();
    assert_eq!(
        first_locations,
        vec![Location::new(6, 9), Location::new(6, 16)]
    );
    assert_eq!(second.values().collect::<Vec<_>>(), vec!["visa", "12.50"]);
}

#[test]
fn feature_header_collects_tags_description_and_language() {
    let feature = Script::new()
        .rule(RuleKind::Feature, |s| {
            s.rule(RuleKind::FeatureHeader, |s| {
                s.rule(RuleKind::Tags, |s| {
                    s.leaf(tag_line(1, &[(1, "@billing"), (10, "@eu")]))
                        .leaf(tag_line(2, &[(3, "@slow")]))
                })
                .leaf(
                    feature_line(3, "Facturation")
                        .with_keyword("Fonctionnalité")
                        .with_language("fr"),
                )
                .rule(RuleKind::Description, |s| {
                    s.leaf(other(4, "  Les factures sont"))
                        .leaf(other(5, ""))
                        .leaf(other(6, "  envoyées chaque mois."))
                        .leaf(other(7, "   "))
                })
            })
        })
        .reduce();

    assert_eq!(feature.language, "fr");
    assert_eq!(feature.keyword, "Fonctionnalité");
    assert_eq!(feature.location, Location::new(3, 1));
    assert_eq!(
        feature.tags,
        vec![
            Tag::new(Location::new(1, 1), "@billing"),
            Tag::new(Location::new(1, 10), "@eu"),
            Tag::new(Location::new(2, 3), "@slow"),
        ]
    );
    assert_eq!(
        feature.description,
        "  Les factures sont\n\n  envoyées chaque mois."
    );
}

#[test]
fn background_carries_description_and_steps() {
    let feature = Script::new()
        .rule(RuleKind::Feature, |s| {
            s.rule(RuleKind::FeatureHeader, header("Accounts"))
                .rule(RuleKind::Background, |s| {
                    s.leaf(background_line(3, "a signed-in user"))
                        .rule(RuleKind::Description, |s| s.leaf(other(4, "    shared setup")))
                        .rule(RuleKind::Step, |s| s.leaf(step_line(5, "Given ", "a user")))
                        .rule(RuleKind::Step, |s| s.leaf(step_line(6, "And ", "a session")))
                })
                .rule(RuleKind::ScenarioDefinition, |s| {
                    s.rule(RuleKind::Scenario, |s| s.leaf(scenario_line(8, "logout")))
                })
        })
        .reduce();

    let Some(background) = feature.background() else {
        panic!("expected a background");
    };
    assert_eq!(background.location, Location::new(3, 3));
    assert_eq!(background.keyword, "Background");
    assert_eq!(background.name, "a signed-in user");
    assert_eq!(background.description, "    shared setup");
    let texts: Vec<_> = background.steps.iter().map(|step| step.text.as_str()).collect();
    assert_eq!(texts, vec!["a user", "a session"]);

    let [definition] = feature.scenario_definitions() else {
        panic!("expected one scenario definition");
    };
    assert!(definition.steps().is_empty());
    assert_eq!(definition.description(), "");
}

#[test]
fn background_without_description_has_empty_description() {
    let feature = Script::new()
        .rule(RuleKind::Feature, |s| {
            s.rule(RuleKind::FeatureHeader, header("Bare"))
                .rule(RuleKind::Background, |s| s.leaf(background_line(2, "")))
        })
        .reduce();

    assert_eq!(
        feature.background().map(|background| background.description.as_str()),
        Some("")
    );
}

#[test]
fn scenarios_keep_source_order_and_their_own_tags() {
    let feature = Script::new()
        .rule(RuleKind::Feature, |s| {
            s.rule(RuleKind::FeatureHeader, header("Ordering"))
                .rule(RuleKind::ScenarioDefinition, |s| {
                    s.rule(RuleKind::Tags, |s| s.leaf(tag_line(3, &[(3, "@first")])))
                        .rule(RuleKind::Scenario, |s| s.leaf(scenario_line(4, "one")))
                })
                .rule(RuleKind::ScenarioDefinition, |s| {
                    s.rule(RuleKind::Scenario, |s| s.leaf(scenario_line(6, "two")))
                })
                .rule(RuleKind::ScenarioDefinition, |s| {
                    s.rule(RuleKind::Tags, |s| {
                        s.leaf(tag_line(8, &[(3, "@third"), (10, "@last")]))
                    })
                    .rule(RuleKind::Scenario, |s| s.leaf(scenario_line(9, "three")))
                })
        })
        .reduce();

    let names: Vec<_> = feature
        .scenario_definitions()
        .iter()
        .map(ScenarioDefinition::name)
        .collect();
    assert_eq!(names, vec!["one", "two", "three"]);

    let tag_names = |index: usize| -> Vec<String> {
        feature
            .scenario_definitions()
            .get(index)
            .map(|definition| definition.tags().iter().map(|tag| tag.name.clone()).collect())
            .unwrap_or_default()
    };
    assert_eq!(tag_names(0), vec!["@first"]);
    assert!(tag_names(1).is_empty());
    assert_eq!(tag_names(2), vec!["@third", "@last"]);
}

#[test]
fn unknown_rules_pass_through_without_affecting_the_tree() {
    let feature = Script::new()
        .rule(RuleKind::Feature, |s| {
            s.rule(RuleKind::FeatureHeader, header("Pass-through"))
                .rule(RuleKind::Custom("Rule"), |s| s.leaf(other(2, "ignored")))
        })
        .reduce();

    assert!(feature.scenario_definitions().is_empty());
    assert_eq!(feature.description, "");
}
