//! Immutable AST value types for Gherkin feature files.
//!
//! The types in this crate are the output contract of the AST builder: plain
//! data records produced exactly once per reduced grammar rule. They carry no
//! parsing behaviour of their own beyond read-only convenience accessors.
//!
//! Every type implements [`serde::Serialize`] using camelCase field names so
//! renderers can emit the conventional JSON representation of a Gherkin AST.
//! The [`ScenarioDefinition`] and [`StepArgument`] sum types serialise with a
//! `type` discriminator.
//!
//! # Examples
//!
//! ```
//! use gherkin_ast::{Location, Tag};
//!
//! let tag = Tag::new(Location::new(1, 3), "@smoke");
//! assert_eq!(tag.location.to_string(), "(1:3)");
//! ```

mod feature;
mod location;
mod scenario;
mod step;
mod table;

pub use feature::Feature;
pub use location::Location;
pub use scenario::{Background, ExamplesTable, Scenario, ScenarioDefinition, ScenarioOutline, Tag};
pub use step::{DocString, DocStringLine, Step, StepArgument};
pub use table::{DataTable, TableCell, TableRow};
