//! Leaf tokens emitted by the grammar engine.
//!
//! Tokens arrive already classified: the engine has matched the line against
//! the dialect's keywords and, for tag lines and table rows, split it into
//! column-addressed spans. The builder never re-inspects raw source text.

use std::fmt;

use gherkin_ast::Location;

/// Classification of a single feature-file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input.
    Eof,
    /// A blank line.
    Empty,
    /// A `#` comment line.
    Comment,
    /// A line of `@tag` annotations.
    TagLine,
    /// The `Feature:` header line.
    FeatureLine,
    /// The `Background:` header line.
    BackgroundLine,
    /// A `Scenario:` header line.
    ScenarioLine,
    /// A `Scenario Outline:` header line.
    ScenarioOutlineLine,
    /// An `Examples:` header line.
    ExamplesLine,
    /// A `Given`/`When`/`Then`/`And`/`But` line.
    StepLine,
    /// An opening or closing doc string delimiter.
    DocStringSeparator,
    /// A pipe-delimited table row.
    TableRow,
    /// A `# language:` directive.
    Language,
    /// Any other line: description text or doc string content.
    Other,
}

impl TokenKind {
    /// Name of the token kind as used in grammar definitions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Empty => "Empty",
            Self::Comment => "Comment",
            Self::TagLine => "TagLine",
            Self::FeatureLine => "FeatureLine",
            Self::BackgroundLine => "BackgroundLine",
            Self::ScenarioLine => "ScenarioLine",
            Self::ScenarioOutlineLine => "ScenarioOutlineLine",
            Self::ExamplesLine => "ExamplesLine",
            Self::StepLine => "StepLine",
            Self::DocStringSeparator => "DocStringSeparator",
            Self::TableRow => "TableRow",
            Self::Language => "Language",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column-addressed fragment of a line, such as one tag or one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSpan {
    /// 1-based column where the fragment starts.
    pub column: usize,
    /// Fragment text.
    pub text: String,
}

impl LineSpan {
    /// Create a span.
    #[must_use]
    pub fn new(column: usize, text: impl Into<String>) -> Self {
        Self {
            column,
            text: text.into(),
        }
    }
}

/// A classified line handed to the builder by the grammar engine.
///
/// # Examples
/// ```
/// use gherkin_ast::Location;
/// use gherkin_ast_builder::{LineSpan, Token, TokenKind};
///
/// let token = Token::new(TokenKind::TagLine, Location::new(1, 1))
///     .with_items(vec![LineSpan::new(1, "@fast"), LineSpan::new(7, "@slow")]);
/// assert_eq!(token.items.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Line classification.
    pub kind: TokenKind,
    /// Keyword the line matched, for example `Given ` or `Feature`.
    pub keyword: String,
    /// Text following the keyword, or the whole line for [`TokenKind::Other`].
    pub text: String,
    /// Position of the first significant character.
    pub location: Location,
    /// Dialect of the document; only set on the feature line.
    pub language: Option<String>,
    /// Ordered fragments for tag lines and table rows.
    pub items: Vec<LineSpan>,
}

impl Token {
    /// Create a token with no keyword, text or fragments.
    #[must_use]
    pub fn new(kind: TokenKind, location: Location) -> Self {
        Self {
            kind,
            keyword: String::new(),
            text: String::new(),
            location,
            language: None,
            items: Vec::new(),
        }
    }

    /// Set the matched keyword.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Set the matched text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the dialect tag.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the line fragments.
    #[must_use]
    pub fn with_items(mut self, items: Vec<LineSpan>) -> Self {
        self.items = items;
        self
    }

    /// Location of a fragment of this token: the token's line at `column`.
    #[must_use]
    pub const fn span_location(&self, span: &LineSpan) -> Location {
        self.location.with_column(span.column)
    }
}
