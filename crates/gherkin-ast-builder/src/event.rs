//! Recorded grammar events and replay into a fresh builder.

use gherkin_ast::Feature;

use crate::builder::{AstBuilder, GrammarEvents};
use crate::config::BuilderConfig;
use crate::error::AstBuilderError;
use crate::rule::RuleKind;
use crate::token::Token;

/// One event in the sequence a grammar engine emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A rule was entered.
    Enter(RuleKind),
    /// A leaf token was matched.
    Leaf(Token),
    /// The current rule was exited.
    Exit(RuleKind),
}

impl Event {
    /// Deliver this event to `sink`.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by [`GrammarEvents::on_rule_exit`].
    pub fn dispatch<S: GrammarEvents + ?Sized>(self, sink: &mut S) -> Result<(), AstBuilderError> {
        match self {
            Self::Enter(rule) => sink.on_rule_enter(rule),
            Self::Leaf(token) => sink.on_leaf(token),
            Self::Exit(rule) => sink.on_rule_exit(rule)?,
        }
        Ok(())
    }
}

/// Reduce a complete event sequence with the default configuration.
///
/// # Errors
///
/// Returns the first [`AstBuilderError`] raised by a rule exit.
///
/// # Examples
/// ```
/// use gherkin_ast_builder::replay;
///
/// let feature = replay(Vec::new()).expect("empty input reduces");
/// assert!(feature.is_none());
/// ```
pub fn replay<I>(events: I) -> Result<Option<Feature>, AstBuilderError>
where
    I: IntoIterator<Item = Event>,
{
    replay_with_config(events, &BuilderConfig::default())
}

/// Reduce a complete event sequence using `config`.
///
/// # Errors
///
/// Returns the first [`AstBuilderError`] raised by a rule exit.
pub fn replay_with_config<I>(
    events: I,
    config: &BuilderConfig,
) -> Result<Option<Feature>, AstBuilderError>
where
    I: IntoIterator<Item = Event>,
{
    let mut builder = AstBuilder::with_config(config);
    for event in events {
        event.dispatch(&mut builder)?;
    }
    Ok(builder.into_result())
}
