//! Stack-driven reduction of grammar events into a [`Feature`].

use gherkin_ast::Feature;
use tracing::{error, trace};

use crate::config::BuilderConfig;
use crate::error::{AstBuilderError, ContractViolation};
use crate::node::{AstNode, Reduction};
use crate::rule::RuleKind;
use crate::token::Token;
use crate::transform::transform;

/// Receiver of the events emitted by a grammar engine.
///
/// The engine calls these strictly sequentially and well-nested: every
/// [`on_rule_enter`](Self::on_rule_enter) is matched by exactly one
/// [`on_rule_exit`](Self::on_rule_exit) for the same rule at the same depth.
pub trait GrammarEvents {
    /// A leaf token was matched inside the current rule.
    fn on_leaf(&mut self, token: Token);

    /// A rule was entered.
    fn on_rule_enter(&mut self, rule: RuleKind);

    /// The current rule was exited.
    ///
    /// # Errors
    ///
    /// Returns [`AstBuilderError`] when the rule cannot be reduced.
    fn on_rule_exit(&mut self, rule: RuleKind) -> Result<(), AstBuilderError>;
}

/// Reduces grammar events into a typed [`Feature`].
///
/// One builder handles one document. After an error the stack is left in an
/// unspecified state; discard the builder.
///
/// # Examples
/// ```
/// use gherkin_ast::Location;
/// use gherkin_ast_builder::{AstBuilder, GrammarEvents, RuleKind, Token, TokenKind};
///
/// # fn main() -> Result<(), gherkin_ast_builder::AstBuilderError> {
/// let mut builder = AstBuilder::new();
/// builder.on_rule_enter(RuleKind::Feature);
/// builder.on_rule_enter(RuleKind::FeatureHeader);
/// builder.on_leaf(
///     Token::new(TokenKind::FeatureLine, Location::new(1, 1))
///         .with_keyword("Feature")
///         .with_text("Checkout"),
/// );
/// builder.on_rule_exit(RuleKind::FeatureHeader)?;
/// builder.on_rule_exit(RuleKind::Feature)?;
///
/// let feature = builder.into_result().expect("feature was reduced");
/// assert_eq!(feature.name, "Checkout");
/// assert_eq!(feature.language, "en");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AstBuilder {
    root: AstNode,
    open: Vec<AstNode>,
    default_language: String,
}

impl Default for AstBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AstBuilder {
    /// Create a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&BuilderConfig::default())
    }

    /// Create a builder using `config`.
    #[must_use]
    pub fn with_config(config: &BuilderConfig) -> Self {
        Self {
            root: AstNode::new(RuleKind::None),
            open: Vec::new(),
            default_language: config.default_language.clone(),
        }
    }

    /// Number of rules currently open, not counting the root frame.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// The reduced feature, or `None` if the input held no feature.
    #[must_use]
    pub fn result(&self) -> Option<&Feature> {
        self.root.feature()
    }

    /// Consume the builder, returning the reduced feature if there was one.
    #[must_use]
    pub fn into_result(mut self) -> Option<Feature> {
        self.root.take_feature()
    }

    fn current_mut(&mut self) -> &mut AstNode {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    fn pop(&mut self, rule: RuleKind) -> Result<AstNode, ContractViolation> {
        let open = self
            .open
            .last()
            .map(AstNode::rule)
            .ok_or(ContractViolation::UnbalancedRuleExit(rule))?;
        if open != rule {
            return Err(ContractViolation::MismatchedRuleExit { open, found: rule });
        }
        self.open
            .pop()
            .ok_or(ContractViolation::UnbalancedRuleExit(rule))
    }
}

impl GrammarEvents for AstBuilder {
    fn on_leaf(&mut self, token: Token) {
        trace!(kind = %token.kind, location = %token.location, "leaf");
        let kind = token.kind;
        self.current_mut().add(kind, Reduction::Token(token));
    }

    fn on_rule_enter(&mut self, rule: RuleKind) {
        trace!(%rule, depth = self.open.len(), "enter rule");
        self.open.push(AstNode::new(rule));
    }

    fn on_rule_exit(&mut self, rule: RuleKind) -> Result<(), AstBuilderError> {
        let node = self.pop(rule).inspect_err(|violation| {
            error!(%rule, error = %violation, "rule exit does not match the open rule");
        })?;
        let reduction = transform(node, &self.default_language).inspect_err(|err| {
            if !err.is_structural() {
                error!(%rule, error = %err, "rule could not be reduced");
            }
        })?;
        trace!(%rule, reduced = reduction.variant_name(), "exit rule");
        self.current_mut().add(rule, reduction);
        Ok(())
    }
}
