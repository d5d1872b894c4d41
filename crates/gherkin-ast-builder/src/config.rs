//! Builder configuration parsed from environment variables.
//!
//! All settings can be overridden via environment variables prefixed with
//! `GHERKIN_AST_`.

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Info` when not specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every leaf and rule transition.
    Trace,
    /// One line per reduced feature.
    Debug,
    /// Standard informational messages.
    #[default]
    Info,
    /// Structural problems in the document, such as uneven tables.
    Warn,
    /// Contract violations by the grammar engine.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Dialect assumed when the feature line carries no language tag.
const DEFAULT_LANGUAGE: &str = "en";

/// Configuration for [`AstBuilder`](crate::AstBuilder).
///
/// # Environment Variables
///
/// - `GHERKIN_AST_LOG_LEVEL`: Sets the log level (trace, debug, info, warn,
///   error)
/// - `GHERKIN_AST_DEFAULT_LANGUAGE`: Language recorded on features whose
///   feature line has no dialect tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Fallback value for [`Feature::language`](gherkin_ast::Feature::language).
    pub default_language: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            default_language: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}

impl BuilderConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_level = match lookup("GHERKIN_AST_LOG_LEVEL") {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };

        let default_language = match lookup("GHERKIN_AST_DEFAULT_LANGUAGE") {
            Some(val) => parse_language(&val)?,
            None => DEFAULT_LANGUAGE.to_owned(),
        };

        Ok(Self {
            log_level,
            default_language,
        })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// Intended for host overrides that take precedence over environment-based
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfig` when the language override is
    /// blank.
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        default_language: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(language) = default_language {
            self.default_language = parse_language(language)?;
        }

        Ok(self)
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

fn parse_language(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidConfig(
            "default language must not be empty".to_owned(),
        ));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("debug", LogLevel::Debug)]
    #[case("info", LogLevel::Info)]
    #[case("warn", LogLevel::Warn)]
    #[case("warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    #[case("DEBUG", LogLevel::Debug)]
    fn log_level_parses_valid_values(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "verbose".parse::<LogLevel>();
        assert!(result.unwrap_err().to_string().contains("unknown log level"));
    }

    #[test]
    fn log_level_as_filter_str_round_trips() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(level.as_filter_str().parse::<LogLevel>().ok(), Some(level));
        }
    }

    #[test]
    fn builder_config_default_values() {
        let config = BuilderConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.default_language, "en");
    }

    #[test]
    fn lookup_reads_both_variables() {
        let config = BuilderConfig::from_lookup(lookup_from(&[
            ("GHERKIN_AST_LOG_LEVEL", "trace"),
            ("GHERKIN_AST_DEFAULT_LANGUAGE", " fr "),
        ]))
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.default_language, "fr");
    }

    #[test]
    fn lookup_falls_back_to_defaults() {
        let config = BuilderConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, BuilderConfig::default());
    }

    #[rstest]
    #[case(&[("GHERKIN_AST_LOG_LEVEL", "loud")])]
    #[case(&[("GHERKIN_AST_DEFAULT_LANGUAGE", "   ")])]
    fn lookup_rejects_invalid_values(#[case] pairs: &[(&str, &str)]) {
        assert!(BuilderConfig::from_lookup(lookup_from(pairs)).is_err());
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let config = BuilderConfig::default()
            .apply_overrides(Some(LogLevel::Error), Some("ja"))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.default_language, "ja");

        let config = BuilderConfig::default().apply_overrides(None, None).unwrap();
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn apply_overrides_rejects_blank_language() {
        assert!(
            BuilderConfig::default()
                .apply_overrides(None, Some(""))
                .is_err()
        );
    }

    #[test]
    fn with_log_level_builder() {
        let config = BuilderConfig::default().with_log_level(LogLevel::Debug);
        assert_eq!(config.log_level, LogLevel::Debug);
    }
}
