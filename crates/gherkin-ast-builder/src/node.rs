//! Generic in-progress frames and the values they accumulate.

use std::collections::HashMap;

use gherkin_ast::{
    Background, DataTable, DocString, ExamplesTable, Feature, ScenarioDefinition, Step,
};

use crate::rule::{ChildKey, RuleKind};
use crate::token::{Token, TokenKind};

/// Anything a frame can hold: a raw leaf, a pass-through sub-frame, or the
/// typed reduction of a sub-rule.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Reduction {
    Token(Token),
    Node(AstNode),
    Step(Step),
    DocString(DocString),
    DataTable(DataTable),
    Background(Background),
    ScenarioDefinition(ScenarioDefinition),
    Examples(ExamplesTable),
    Description(String),
    Feature(Box<Feature>),
}

impl Reduction {
    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            Self::Token(_) => "token",
            Self::Node(_) => "node",
            Self::Step(_) => "step",
            Self::DocString(_) => "doc string",
            Self::DataTable(_) => "data table",
            Self::Background(_) => "background",
            Self::ScenarioDefinition(_) => "scenario definition",
            Self::Examples(_) => "examples",
            Self::Description(_) => "description",
            Self::Feature(_) => "feature",
        }
    }
}

/// One frame of the builder stack.
///
/// Children are grouped by key; within a key they keep attachment order.
/// A frame is owned by the stack until popped, then consumed by the
/// transformer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AstNode {
    rule: RuleKind,
    children: HashMap<ChildKey, Vec<Reduction>>,
}

impl AstNode {
    pub(crate) fn new(rule: RuleKind) -> Self {
        Self {
            rule,
            children: HashMap::new(),
        }
    }

    pub(crate) const fn rule(&self) -> RuleKind {
        self.rule
    }

    pub(crate) fn add(&mut self, key: impl Into<ChildKey>, item: Reduction) {
        self.children.entry(key.into()).or_default().push(item);
    }

    /// Remove every child under `key`, keeping those `pick` accepts.
    fn take_items<T>(
        &mut self,
        key: impl Into<ChildKey>,
        pick: impl FnMut(Reduction) -> Option<T>,
    ) -> Vec<T> {
        self.children
            .remove(&key.into())
            .unwrap_or_default()
            .into_iter()
            .filter_map(pick)
            .collect()
    }

    fn take_single<T>(
        &mut self,
        key: impl Into<ChildKey>,
        pick: impl FnMut(Reduction) -> Option<T>,
    ) -> Option<T> {
        self.take_items(key, pick).into_iter().next()
    }

    pub(crate) fn take_tokens(&mut self, kind: TokenKind) -> Vec<Token> {
        self.take_items(kind, |item| match item {
            Reduction::Token(token) => Some(token),
            _ => None,
        })
    }

    pub(crate) fn take_token(&mut self, kind: TokenKind) -> Option<Token> {
        self.take_tokens(kind).into_iter().next()
    }

    pub(crate) fn take_node(&mut self, rule: RuleKind) -> Option<Self> {
        self.take_single(rule, |item| match item {
            Reduction::Node(node) => Some(node),
            _ => None,
        })
    }

    pub(crate) fn take_steps(&mut self) -> Vec<Step> {
        self.take_items(RuleKind::Step, |item| match item {
            Reduction::Step(step) => Some(step),
            _ => None,
        })
    }

    pub(crate) fn take_data_table(&mut self) -> Option<DataTable> {
        self.take_single(RuleKind::DataTable, |item| match item {
            Reduction::DataTable(table) => Some(table),
            _ => None,
        })
    }

    pub(crate) fn take_doc_string(&mut self) -> Option<DocString> {
        self.take_single(RuleKind::DocString, |item| match item {
            Reduction::DocString(doc) => Some(doc),
            _ => None,
        })
    }

    pub(crate) fn take_background(&mut self) -> Option<Background> {
        self.take_single(RuleKind::Background, |item| match item {
            Reduction::Background(background) => Some(background),
            _ => None,
        })
    }

    pub(crate) fn take_scenario_definitions(&mut self) -> Vec<ScenarioDefinition> {
        self.take_items(RuleKind::ScenarioDefinition, |item| match item {
            Reduction::ScenarioDefinition(definition) => Some(definition),
            _ => None,
        })
    }

    pub(crate) fn take_examples(&mut self) -> Vec<ExamplesTable> {
        self.take_items(RuleKind::Examples, |item| match item {
            Reduction::Examples(examples) => Some(examples),
            _ => None,
        })
    }

    /// The attached description, or an empty string when none was reduced.
    pub(crate) fn take_description(&mut self) -> String {
        self.take_single(RuleKind::Description, |item| match item {
            Reduction::Description(text) => Some(text),
            _ => None,
        })
        .unwrap_or_default()
    }

    pub(crate) fn take_feature(&mut self) -> Option<Feature> {
        self.take_single(RuleKind::Feature, |item| match item {
            Reduction::Feature(feature) => Some(*feature),
            _ => None,
        })
    }

    pub(crate) fn feature(&self) -> Option<&Feature> {
        self.children
            .get(&ChildKey::Rule(RuleKind::Feature))?
            .iter()
            .find_map(|item| match item {
                Reduction::Feature(feature) => Some(feature.as_ref()),
                _ => None,
            })
    }
}
