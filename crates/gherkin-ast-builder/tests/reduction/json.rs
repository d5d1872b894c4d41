//! Shape of the serialised tree handed to downstream renderers.

use gherkin_ast_builder::RuleKind;
use serde_json::json;

use crate::script::{Script, feature_line, other, scenario_line, separator, step_line, table_row};

#[test]
fn reduced_feature_serialises_to_camel_case_json() {
    let feature = Script::new()
        .rule(RuleKind::Feature, |s| {
            s.rule(RuleKind::FeatureHeader, |s| s.leaf(feature_line(1, "Render")))
                .rule(RuleKind::ScenarioDefinition, |s| {
                    s.rule(RuleKind::Scenario, |s| {
                        s.leaf(scenario_line(2, "shapes"))
                            .rule(RuleKind::Step, |s| {
                                s.leaf(step_line(3, "Given ", "a table"))
                                    .rule(RuleKind::DataTable, |s| s.leaf(table_row(4, &[(9, "x")])))
                            })
                            .rule(RuleKind::Step, |s| {
                                s.leaf(step_line(5, "Then ", "a doc"))
                                    .rule(RuleKind::DocString, |s| {
                                        s.leaf(separator(6, "")).leaf(other(7, "text"))
                                    })
                            })
                    })
                })
        })
        .reduce();

    let value = serde_json::to_value(&feature)
        .unwrap_or_else(|err| panic!("feature should serialise: {err}"));

    assert_eq!(
        value.pointer("/scenarioDefinitions/0/type"),
        Some(&json!("Scenario"))
    );
    assert_eq!(
        value.pointer("/scenarioDefinitions/0/steps/0/argument"),
        Some(&json!({
            "type": "DataTable",
            "rows": [{
                "location": {"line": 4, "column": 7},
                "cells": [{"location": {"line": 4, "column": 9}, "value": "x"}]
            }]
        }))
    );
    assert_eq!(
        value.pointer("/scenarioDefinitions/0/steps/1/argument"),
        Some(&json!({
            "type": "DocString",
            "location": {"line": 6, "column": 7},
            "contentType": "",
            "lines": [{"location": {"line": 7, "column": 1}, "text": "text"}]
        }))
    );
    assert!(value.get("background").is_none());
}
