//! Source positions attached to every AST node.

use std::fmt;

use serde::Serialize;

/// A 1-based line and column within a feature file.
///
/// # Examples
/// ```
/// use gherkin_ast::Location;
/// let location = Location::new(4, 7);
/// assert_eq!(location.line, 4);
/// assert_eq!(location.to_string(), "(4:7)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Location {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

impl Location {
    /// Create a location from a line and column pair.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Return a location on the same line at a different column.
    #[must_use]
    pub const fn with_column(self, column: usize) -> Self {
        Self {
            line: self.line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.line, self.column)
    }
}
