//! Error types surfaced while reducing grammar events.
//!
//! Two classes exist. Structural errors describe a property of the document
//! and should be reported against it. Contract violations mean the grammar
//! engine (or this crate) emitted an impossible event sequence; they are never
//! caused by user input.

use gherkin_ast::Location;
use thiserror::Error;

use crate::rule::RuleKind;
use crate::token::TokenKind;

/// Errors returned when a rule exit cannot be reduced.
///
/// After any error the builder's stack is in an unspecified state and the
/// builder should be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AstBuilderError {
    /// A table row holds a different number of cells than the first row.
    #[error("{location}: inconsistent cell count within the table")]
    InconsistentCellCount {
        /// Location of the first row whose width differs.
        location: Location,
    },
    /// The event sequence broke the grammar engine's contract.
    #[error("internal grammar error: {0}")]
    Contract(#[from] ContractViolation),
}

impl AstBuilderError {
    /// Returns `true` when the error describes the document rather than a bug.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::InconsistentCellCount { .. })
    }

    /// Location in the document the error refers to, when it has one.
    #[must_use]
    pub const fn location(&self) -> Option<Location> {
        match self {
            Self::InconsistentCellCount { location } => Some(*location),
            Self::Contract(_) => None,
        }
    }
}

/// Impossible event sequences detected during reduction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ContractViolation {
    /// A rule exit named a different rule from the one currently open.
    #[error("exit of rule {found} while rule {open} is open")]
    MismatchedRuleExit {
        /// Rule on top of the stack.
        open: RuleKind,
        /// Rule named by the exit event.
        found: RuleKind,
    },
    /// A rule exit arrived with only the root frame on the stack.
    #[error("exit of rule {0} with no open rule")]
    UnbalancedRuleExit(RuleKind),
    /// A scenario definition held neither a scenario nor a scenario outline.
    #[error("scenario definition contains neither a scenario nor a scenario outline")]
    MissingScenario,
    /// A rule lacked the header token it is built from.
    #[error("rule {rule} has no {token} token")]
    MissingToken {
        /// Rule being reduced.
        rule: RuleKind,
        /// Token kind that was expected.
        token: TokenKind,
    },
}

/// Errors raised while loading builder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
