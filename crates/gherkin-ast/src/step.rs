//! Steps and their optional arguments.

use serde::Serialize;

use crate::{DataTable, Location};

/// One content line of a doc string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocStringLine {
    /// Position of the line within the feature file.
    pub location: Location,
    /// Line text with the doc string indentation removed.
    pub text: String,
}

impl DocStringLine {
    /// Create a content line.
    #[must_use]
    pub fn new(location: Location, text: impl Into<String>) -> Self {
        Self {
            location,
            text: text.into(),
        }
    }
}

/// A delimited block of free text attached to a step.
///
/// # Examples
/// ```
/// use gherkin_ast::{DocString, DocStringLine, Location};
///
/// let doc = DocString::new(
///     Location::new(3, 5),
///     "json",
///     vec![
///         DocStringLine::new(Location::new(4, 5), "{"),
///         DocStringLine::new(Location::new(5, 5), "}"),
///     ],
/// );
/// assert_eq!(doc.content(), "{\n}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocString {
    /// Position of the opening separator.
    pub location: Location,
    /// Content type written after the opening separator; empty when omitted.
    pub content_type: String,
    /// Content lines in source order.
    pub lines: Vec<DocStringLine>,
}

impl DocString {
    /// Create a doc string from its opening location, content type and lines.
    #[must_use]
    pub fn new(
        location: Location,
        content_type: impl Into<String>,
        lines: Vec<DocStringLine>,
    ) -> Self {
        Self {
            location,
            content_type: content_type.into(),
            lines,
        }
    }

    /// Join the content lines with newline separators.
    #[must_use]
    pub fn content(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The payload following a step line.
///
/// A step always carries exactly one variant; steps without a table or doc
/// string hold [`StepArgument::Empty`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type")]
pub enum StepArgument {
    /// A pipe-delimited data table.
    DataTable(DataTable),
    /// A delimited doc string.
    DocString(DocString),
    /// No argument follows the step line.
    #[default]
    Empty,
}

impl StepArgument {
    /// Returns `true` for [`StepArgument::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A single `Given`/`When`/`Then`/`And`/`But` step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Position of the step line.
    pub location: Location,
    /// Matched keyword, including its trailing space where the dialect has one.
    pub keyword: String,
    /// Step text following the keyword.
    pub text: String,
    /// Table, doc string, or the empty argument.
    pub argument: StepArgument,
}

impl Step {
    /// Create a step.
    #[must_use]
    pub fn new(
        location: Location,
        keyword: impl Into<String>,
        text: impl Into<String>,
        argument: StepArgument,
    ) -> Self {
        Self {
            location,
            keyword: keyword.into(),
            text: text.into(),
            argument,
        }
    }

    /// The attached data table, if any.
    #[must_use]
    pub fn data_table(&self) -> Option<&DataTable> {
        match &self.argument {
            StepArgument::DataTable(table) => Some(table),
            StepArgument::DocString(_) | StepArgument::Empty => None,
        }
    }

    /// The attached doc string, if any.
    #[must_use]
    pub fn doc_string(&self) -> Option<&DocString> {
        match &self.argument {
            StepArgument::DocString(doc) => Some(doc),
            StepArgument::DataTable(_) | StepArgument::Empty => None,
        }
    }
}
