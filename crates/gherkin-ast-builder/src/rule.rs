//! Grammar rule kinds and the keys children are filed under.

use std::fmt;

use crate::token::TokenKind;

/// A grammar production entered or exited by the grammar engine.
///
/// Only the rules with a typed AST counterpart are transformed; every other
/// rule, including [`RuleKind::Custom`] productions, passes its children
/// through to the enclosing rule unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// The sentinel frame at the bottom of the builder stack.
    None,
    /// A whole feature file.
    Feature,
    /// Tags, feature line and description of a feature.
    FeatureHeader,
    /// A background block.
    Background,
    /// A scenario or scenario outline together with its tags.
    ScenarioDefinition,
    /// A plain scenario block.
    Scenario,
    /// A scenario outline block.
    ScenarioOutline,
    /// An examples block with its tags and table.
    Examples,
    /// A step line and its argument.
    Step,
    /// A data table.
    DataTable,
    /// A doc string.
    DocString,
    /// A run of tag lines.
    Tags,
    /// Free-form description lines.
    Description,
    /// A production this builder has no special handling for.
    Custom(&'static str),
}

impl RuleKind {
    /// Name of the rule as used in grammar definitions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Feature => "Feature",
            Self::FeatureHeader => "Feature_Header",
            Self::Background => "Background",
            Self::ScenarioDefinition => "Scenario_Definition",
            Self::Scenario => "Scenario",
            Self::ScenarioOutline => "ScenarioOutline",
            Self::Examples => "Examples",
            Self::Step => "Step",
            Self::DataTable => "DataTable",
            Self::DocString => "DocString",
            Self::Tags => "Tags",
            Self::Description => "Description",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key under which a child is attached to its parent frame.
///
/// Leaves are filed under their token kind and reduced sub-rules under their
/// rule kind, so a frame can hold both a `TableRow` token and a `DataTable`
/// result without collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildKey {
    /// A leaf token of the given kind.
    Token(TokenKind),
    /// The reduction of a sub-rule of the given kind.
    Rule(RuleKind),
}

impl From<TokenKind> for ChildKey {
    fn from(kind: TokenKind) -> Self {
        Self::Token(kind)
    }
}

impl From<RuleKind> for ChildKey {
    fn from(kind: RuleKind) -> Self {
        Self::Rule(kind)
    }
}
