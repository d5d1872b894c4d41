//! Per-rule construction of typed AST values from popped frames.
//!
//! Each arm consumes the frame it is given. Rules without a typed counterpart
//! hand the frame back as [`Reduction::Node`] so an ancestor can pick its
//! children apart.

use gherkin_ast::{
    Background, DataTable, DocString, DocStringLine, ExamplesTable, Feature, Scenario,
    ScenarioDefinition, ScenarioOutline, Step, StepArgument, TableCell, TableRow, Tag,
};
use tracing::{debug, warn};

use crate::error::{AstBuilderError, ContractViolation};
use crate::node::{AstNode, Reduction};
use crate::rule::RuleKind;
use crate::token::{Token, TokenKind};

/// Reduce a popped frame according to its rule kind.
pub(crate) fn transform(
    mut node: AstNode,
    default_language: &str,
) -> Result<Reduction, AstBuilderError> {
    let reduction = match node.rule() {
        RuleKind::Step => Reduction::Step(build_step(&mut node)?),
        RuleKind::DocString => Reduction::DocString(build_doc_string(&mut node)?),
        RuleKind::DataTable => Reduction::DataTable(DataTable::new(table_rows(&mut node)?)),
        RuleKind::Background => Reduction::Background(build_background(&mut node)?),
        RuleKind::ScenarioDefinition => {
            Reduction::ScenarioDefinition(build_scenario_definition(&mut node)?)
        }
        RuleKind::Examples => Reduction::Examples(build_examples(&mut node)?),
        RuleKind::Description => Reduction::Description(description(&mut node)),
        RuleKind::Feature => {
            Reduction::Feature(Box::new(build_feature(&mut node, default_language)?))
        }
        RuleKind::None
        | RuleKind::FeatureHeader
        | RuleKind::Scenario
        | RuleKind::ScenarioOutline
        | RuleKind::Tags
        | RuleKind::Custom(_) => Reduction::Node(node),
    };
    Ok(reduction)
}

fn required_token(node: &mut AstNode, kind: TokenKind) -> Result<Token, ContractViolation> {
    let rule = node.rule();
    node.take_token(kind)
        .ok_or(ContractViolation::MissingToken { rule, token: kind })
}

fn build_step(node: &mut AstNode) -> Result<Step, ContractViolation> {
    let line = required_token(node, TokenKind::StepLine)?;
    // A well-formed grammar never attaches both; the table wins if it does.
    let argument = node
        .take_data_table()
        .map(StepArgument::DataTable)
        .or_else(|| node.take_doc_string().map(StepArgument::DocString))
        .unwrap_or_default();
    Ok(Step::new(line.location, line.keyword, line.text, argument))
}

fn build_doc_string(node: &mut AstNode) -> Result<DocString, ContractViolation> {
    let separator = required_token(node, TokenKind::DocStringSeparator)?;
    let lines = node
        .take_tokens(TokenKind::Other)
        .into_iter()
        .map(|token| DocStringLine::new(token.location, token.text))
        .collect();
    Ok(DocString::new(separator.location, separator.text, lines))
}

fn build_background(node: &mut AstNode) -> Result<Background, ContractViolation> {
    let line = required_token(node, TokenKind::BackgroundLine)?;
    Ok(Background {
        location: line.location,
        keyword: line.keyword,
        name: line.text,
        description: node.take_description(),
        steps: node.take_steps(),
    })
}

fn build_scenario_definition(node: &mut AstNode) -> Result<ScenarioDefinition, ContractViolation> {
    let tags = tags(node);
    if let Some(mut scenario) = node.take_node(RuleKind::Scenario) {
        let line = required_token(&mut scenario, TokenKind::ScenarioLine)?;
        return Ok(ScenarioDefinition::Scenario(Scenario {
            tags,
            location: line.location,
            keyword: line.keyword,
            name: line.text,
            description: scenario.take_description(),
            steps: scenario.take_steps(),
        }));
    }

    let mut outline = node
        .take_node(RuleKind::ScenarioOutline)
        .ok_or(ContractViolation::MissingScenario)?;
    let line = required_token(&mut outline, TokenKind::ScenarioOutlineLine)?;
    Ok(ScenarioDefinition::ScenarioOutline(ScenarioOutline {
        tags,
        location: line.location,
        keyword: line.keyword,
        name: line.text,
        description: outline.take_description(),
        steps: outline.take_steps(),
        examples: outline.take_examples(),
    }))
}

fn build_examples(node: &mut AstNode) -> Result<ExamplesTable, AstBuilderError> {
    let tags = tags(node);
    let line = required_token(node, TokenKind::ExamplesLine)?;
    Ok(ExamplesTable {
        tags,
        location: line.location,
        keyword: line.keyword,
        name: line.text,
        description: node.take_description(),
        rows: table_rows(node)?,
    })
}

fn build_feature(node: &mut AstNode, default_language: &str) -> Result<Feature, ContractViolation> {
    let mut header = node
        .take_node(RuleKind::FeatureHeader)
        .unwrap_or_else(|| AstNode::new(RuleKind::FeatureHeader));
    let tags = tags(&mut header);
    let line = required_token(&mut header, TokenKind::FeatureLine)?;
    let feature = Feature {
        tags,
        location: line.location,
        language: line
            .language
            .unwrap_or_else(|| default_language.to_owned()),
        keyword: line.keyword,
        name: line.text,
        description: header.take_description(),
        background: node.take_background(),
        scenario_definitions: node.take_scenario_definitions(),
    };
    debug!(
        name = %feature.name,
        language = %feature.language,
        scenarios = feature.scenario_definitions.len(),
        "reduced feature"
    );
    Ok(feature)
}

/// Join the description lines, dropping trailing blank ones.
///
/// Leading indentation and interior blank lines are kept verbatim.
fn description(node: &mut AstNode) -> String {
    let mut lines = node.take_tokens(TokenKind::Other);
    while lines.last().is_some_and(|line| is_blank(&line.text)) {
        lines.pop();
    }
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whitespace in the ASCII sense only; a line holding U+00A0 is not blank.
fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
}

/// One tag per span of every tag line in the attached `Tags` frame.
fn tags(node: &mut AstNode) -> Vec<Tag> {
    node.take_node(RuleKind::Tags)
        .map_or_else(Vec::new, |mut tags| {
            tags.take_tokens(TokenKind::TagLine)
                .iter()
                .flat_map(|token| {
                    token
                        .items
                        .iter()
                        .map(|span| Tag::new(token.span_location(span), span.text.as_str()))
                })
                .collect()
        })
}

fn table_rows(node: &mut AstNode) -> Result<Vec<TableRow>, AstBuilderError> {
    let rows: Vec<TableRow> = node
        .take_tokens(TokenKind::TableRow)
        .iter()
        .map(table_row)
        .collect();
    ensure_cell_count(&rows)?;
    Ok(rows)
}

fn table_row(token: &Token) -> TableRow {
    let cells = token
        .items
        .iter()
        .map(|span| TableCell::new(token.span_location(span), span.text.as_str()))
        .collect();
    TableRow::new(token.location, cells)
}

fn ensure_cell_count(rows: &[TableRow]) -> Result<(), AstBuilderError> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    let width = first.cells.len();
    rows.iter()
        .find(|row| row.cells.len() != width)
        .map_or(Ok(()), |row| {
            warn!(
                location = %row.location,
                expected = width,
                actual = row.cells.len(),
                "inconsistent cell count within the table"
            );
            Err(AstBuilderError::InconsistentCellCount {
                location: row.location,
            })
        })
}
