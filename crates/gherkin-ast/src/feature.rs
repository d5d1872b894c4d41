//! The root node of a parsed feature file.

use serde::Serialize;

use crate::{Background, Location, ScenarioDefinition, Tag};

/// A fully reduced feature file.
///
/// # Examples
/// ```
/// use gherkin_ast::{Feature, Location};
///
/// let feature = Feature {
///     tags: Vec::new(),
///     location: Location::new(1, 1),
///     language: "en".into(),
///     keyword: "Feature".into(),
///     name: "Empty".into(),
///     description: String::new(),
///     background: None,
///     scenario_definitions: Vec::new(),
/// };
/// assert!(feature.scenario_definitions().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Tags written above the feature line.
    pub tags: Vec<Tag>,
    /// Position of the feature line.
    pub location: Location,
    /// Dialect the feature was written in, for example `en` or `fr`.
    pub language: String,
    /// Matched `Feature` keyword.
    pub keyword: String,
    /// Feature title.
    pub name: String,
    /// Free-form description; empty when none was written.
    pub description: String,
    /// Shared background steps, if declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    /// Scenarios and scenario outlines in source order.
    pub scenario_definitions: Vec<ScenarioDefinition>,
}

impl Feature {
    /// The background, if the feature declares one.
    #[must_use]
    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// Scenarios and scenario outlines in source order.
    #[must_use]
    pub fn scenario_definitions(&self) -> &[ScenarioDefinition] {
        &self.scenario_definitions
    }

    /// Iterate over every tag name applying to the definition at `index`,
    /// feature tags first.
    pub fn effective_tags(&self, index: usize) -> impl Iterator<Item = &str> {
        let own = self
            .scenario_definitions
            .get(index)
            .map(ScenarioDefinition::tags)
            .unwrap_or_default();
        self.tags
            .iter()
            .chain(own.iter())
            .map(|tag| tag.name.as_str())
    }
}
