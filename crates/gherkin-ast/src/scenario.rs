//! Backgrounds, scenarios, scenario outlines and their examples.

use serde::Serialize;

use crate::{Location, Step, TableRow};

/// A `@tag` attached to a feature, scenario definition or examples table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Position of the `@` character.
    pub location: Location,
    /// Tag text including the leading `@`.
    pub name: String,
}

impl Tag {
    /// Create a tag.
    #[must_use]
    pub fn new(location: Location, name: impl Into<String>) -> Self {
        Self {
            location,
            name: name.into(),
        }
    }
}

/// Steps shared by every scenario of a feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    /// Position of the background line.
    pub location: Location,
    /// Matched `Background` keyword.
    pub keyword: String,
    /// Text following the keyword.
    pub name: String,
    /// Free-form description; empty when none was written.
    pub description: String,
    /// Steps in source order.
    pub steps: Vec<Step>,
}

/// A concrete scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Tags written above the scenario line.
    pub tags: Vec<Tag>,
    /// Position of the scenario line.
    pub location: Location,
    /// Matched `Scenario` keyword.
    pub keyword: String,
    /// Scenario title.
    pub name: String,
    /// Free-form description; empty when none was written.
    pub description: String,
    /// Steps in source order.
    pub steps: Vec<Step>,
}

/// A table of parameter values bound to a scenario outline.
///
/// The first row acts as the header by position only; no flag records it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamplesTable {
    /// Tags written above the examples line.
    pub tags: Vec<Tag>,
    /// Position of the examples line.
    pub location: Location,
    /// Matched `Examples` keyword.
    pub keyword: String,
    /// Text following the keyword.
    pub name: String,
    /// Free-form description; empty when none was written.
    pub description: String,
    /// All rows, header first.
    pub rows: Vec<TableRow>,
}

impl ExamplesTable {
    /// The first row, which names the outline placeholders.
    #[must_use]
    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }

    /// Every row after the header.
    #[must_use]
    pub fn body(&self) -> &[TableRow] {
        self.rows.get(1..).unwrap_or_default()
    }
}

/// A scenario template expanded once per examples row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutline {
    /// Tags written above the outline line.
    pub tags: Vec<Tag>,
    /// Position of the outline line.
    pub location: Location,
    /// Matched `Scenario Outline` keyword.
    pub keyword: String,
    /// Outline title.
    pub name: String,
    /// Free-form description; empty when none was written.
    pub description: String,
    /// Template steps in source order.
    pub steps: Vec<Step>,
    /// Examples tables in source order.
    pub examples: Vec<ExamplesTable>,
}

/// Either a [`Scenario`] or a [`ScenarioOutline`].
///
/// The accessors expose the fields both variants share so callers can walk a
/// feature's scenario definitions without matching on every use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ScenarioDefinition {
    /// A concrete scenario.
    Scenario(Scenario),
    /// A parameterised scenario template.
    ScenarioOutline(ScenarioOutline),
}

impl ScenarioDefinition {
    /// Tags attached to the definition.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        match self {
            Self::Scenario(scenario) => &scenario.tags,
            Self::ScenarioOutline(outline) => &outline.tags,
        }
    }

    /// Position of the definition's header line.
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            Self::Scenario(scenario) => scenario.location,
            Self::ScenarioOutline(outline) => outline.location,
        }
    }

    /// Matched keyword of the header line.
    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            Self::Scenario(scenario) => &scenario.keyword,
            Self::ScenarioOutline(outline) => &outline.keyword,
        }
    }

    /// Title of the definition.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scenario(scenario) => &scenario.name,
            Self::ScenarioOutline(outline) => &outline.name,
        }
    }

    /// Free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Scenario(scenario) => &scenario.description,
            Self::ScenarioOutline(outline) => &outline.description,
        }
    }

    /// Steps in source order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        match self {
            Self::Scenario(scenario) => &scenario.steps,
            Self::ScenarioOutline(outline) => &outline.steps,
        }
    }

    /// Examples tables; always empty for a plain scenario.
    #[must_use]
    pub fn examples(&self) -> &[ExamplesTable] {
        match self {
            Self::Scenario(_) => &[],
            Self::ScenarioOutline(outline) => &outline.examples,
        }
    }

    /// Returns `true` for [`ScenarioDefinition::ScenarioOutline`].
    #[must_use]
    pub const fn is_outline(&self) -> bool {
        matches!(self, Self::ScenarioOutline(_))
    }
}
