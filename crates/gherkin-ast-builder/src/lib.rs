//! Reduction of grammar-engine events into a typed Gherkin AST.
//!
//! A grammar engine that recognises feature files reports what it matched as
//! a well-nested stream of three events: a rule was entered, a leaf token was
//! matched, a rule was exited. [`AstBuilder`] consumes that stream through the
//! [`GrammarEvents`] trait, keeping one frame per open rule. On each exit the
//! frame is popped and turned into the typed value for its rule (a
//! [`Step`](gherkin_ast::Step), a [`DataTable`](gherkin_ast::DataTable), a
//! [`Feature`](gherkin_ast::Feature), ...) and attached to its parent.
//!
//! Tokenising, dialect keyword matching and rule selection belong to the
//! engine; this crate only checks structural invariants of the tree it builds,
//! such as every table row holding the same number of cells.
//!
//! # Configuration
//!
//! - `GHERKIN_AST_LOG_LEVEL`: Log verbosity (trace, debug, info, warn, error)
//! - `GHERKIN_AST_DEFAULT_LANGUAGE`: Language recorded when the feature line
//!   carries no dialect tag
//!
//! # Example
//!
//! ```
//! use gherkin_ast::Location;
//! use gherkin_ast_builder::{Event, LineSpan, RuleKind, Token, TokenKind, replay};
//!
//! # fn main() -> Result<(), gherkin_ast_builder::AstBuilderError> {
//! let events = vec![
//!     Event::Enter(RuleKind::Feature),
//!     Event::Enter(RuleKind::FeatureHeader),
//!     Event::Enter(RuleKind::Tags),
//!     Event::Leaf(
//!         Token::new(TokenKind::TagLine, Location::new(1, 1))
//!             .with_items(vec![LineSpan::new(1, "@wip")]),
//!     ),
//!     Event::Exit(RuleKind::Tags),
//!     Event::Leaf(
//!         Token::new(TokenKind::FeatureLine, Location::new(2, 1))
//!             .with_keyword("Feature")
//!             .with_text("Search"),
//!     ),
//!     Event::Exit(RuleKind::FeatureHeader),
//!     Event::Exit(RuleKind::Feature),
//! ];
//!
//! let feature = replay(events)?.expect("feature was reduced");
//! assert_eq!(feature.tags.len(), 1);
//! assert!(feature.scenario_definitions.is_empty());
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod config;
mod error;
mod event;
pub mod logging;
mod node;
mod rule;
mod token;
mod transform;

pub use builder::{AstBuilder, GrammarEvents};
pub use error::{AstBuilderError, ConfigError, ContractViolation};
pub use event::{Event, replay, replay_with_config};
pub use gherkin_ast;
pub use rule::{ChildKey, RuleKind};
pub use token::{LineSpan, Token, TokenKind};
