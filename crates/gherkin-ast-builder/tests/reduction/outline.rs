//! Scenario outlines and their examples tables.

use gherkin_ast::{Location, ScenarioDefinition, Tag};
use gherkin_ast_builder::{AstBuilderError, RuleKind};

use crate::script::{
    Script, examples_line, feature_line, other, outline_line, step_line, table_row, tag_line,
};

fn outline(examples: impl FnOnce(Script) -> Script) -> Script {
    Script::new().rule(RuleKind::Feature, |s| {
        s.rule(RuleKind::FeatureHeader, |s| s.leaf(feature_line(1, "Outlines")))
            .rule(RuleKind::ScenarioDefinition, |s| {
                s.rule(RuleKind::Tags, |s| s.leaf(tag_line(2, &[(3, "@data")])))
                    .rule(RuleKind::ScenarioOutline, |s| {
                        let s = s
                            .leaf(outline_line(3, "eating"))
                            .rule(RuleKind::Description, |s| s.leaf(other(4, "    cukes")))
                            .rule(RuleKind::Step, |s| {
                                s.leaf(step_line(5, "Given ", "there are <start> cucumbers"))
                            })
                            .rule(RuleKind::Step, |s| {
                                s.leaf(step_line(6, "Then ", "I should have <left> cucumbers"))
                            });
                        examples(s)
                    })
            })
    })
}

#[test]
fn outline_collects_steps_and_examples_in_order() {
    let feature = outline(|s| {
        s.rule(RuleKind::Examples, |s| {
            s.rule(RuleKind::Tags, |s| s.leaf(tag_line(8, &[(5, "@small"), (12, "@fast")])))
                .leaf(examples_line(9))
                .leaf(table_row(10, &[(9, "start"), (17, "left")]))
                .leaf(table_row(11, &[(9, "12"), (17, "7")]))
                .leaf(table_row(12, &[(9, "20"), (17, "15")]))
        })
        .rule(RuleKind::Examples, |s| {
            s.leaf(examples_line(14).with_text("large"))
                .rule(RuleKind::Description, |s| s.leaf(other(15, "      big numbers")))
                .leaf(table_row(16, &[(9, "start"), (17, "left")]))
                .leaf(table_row(17, &[(9, "900"), (17, "1")]))
        })
    })
    .reduce();

    let [ScenarioDefinition::ScenarioOutline(outline)] = feature.scenario_definitions() else {
        panic!("expected exactly one scenario outline");
    };
    assert_eq!(outline.tags, vec![Tag::new(Location::new(2, 3), "@data")]);
    assert_eq!(outline.keyword, "Scenario Outline");
    assert_eq!(outline.name, "eating");
    assert_eq!(outline.description, "    cukes");
    assert_eq!(outline.steps.len(), 2);

    let [small, large] = outline.examples.as_slice() else {
        panic!("expected two examples tables, got {}", outline.examples.len());
    };

    let small_tags: Vec<_> = small.tags.iter().map(|tag| (tag.location, tag.name.as_str())).collect();
    assert_eq!(
        small_tags,
        vec![
            (Location::new(8, 5), "@small"),
            (Location::new(8, 12), "@fast"),
        ]
    );
    assert_eq!(small.location, Location::new(9, 5));
    assert_eq!(small.keyword, "Examples");
    assert_eq!(small.description, "");
    assert_eq!(
        small.header().map(|row| row.values().collect::<Vec<_>>()),
        Some(vec!["start", "left"])
    );
    assert_eq!(small.body().len(), 2);
    assert_eq!(small.rows.len(), 3);

    assert!(large.tags.is_empty());
    assert_eq!(large.name, "large");
    assert_eq!(large.description, "      big numbers");
    assert_eq!(large.body().len(), 1);
}

#[test]
fn outline_without_examples_has_none() {
    let feature = outline(|s| s).reduce();
    let [definition] = feature.scenario_definitions() else {
        panic!("expected one scenario definition");
    };
    assert!(definition.is_outline());
    assert!(definition.examples().is_empty());
    assert_eq!(definition.tags().len(), 1);
}

#[test]
fn uneven_examples_table_is_rejected() {
    let result = outline(|s| {
        s.rule(RuleKind::Examples, |s| {
            s.leaf(examples_line(8))
                .leaf(table_row(9, &[(9, "start"), (17, "left")]))
                .leaf(table_row(10, &[(9, "12")]))
        })
    })
    .try_reduce();

    assert_eq!(
        result,
        Err(AstBuilderError::InconsistentCellCount {
            location: Location::new(10, 7),
        })
    );
}
