//! Structured logging with environment variable configuration.
//!
//! The builder emits `tracing` events; hosts without their own subscriber can
//! install one here. Logs are written to stderr so they never mix with a
//! rendered AST on stdout. The filter only covers this crate's targets, so a
//! host's own crates stay silent unless it installs a wider subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::BuilderConfig;

/// Target prefix shared by every event the builder emits.
const TARGET: &str = "gherkin_ast_builder";

fn filter_directive(config: &BuilderConfig) -> String {
    format!("{TARGET}={}", config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. Host overrides applied with [`BuilderConfig::apply_overrides`]
/// 2. `GHERKIN_AST_LOG_LEVEL` (parsed into `config.log_level`)
/// 3. Default configuration value
///
/// # Note
///
/// If a global subscriber is already set, this function silently ignores
/// the error. This is expected behaviour in tests or when the host installs
/// its own subscriber first.
pub fn init_logging(config: &BuilderConfig) {
    let filter = EnvFilter::new(filter_directive(config));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    // The first subscriber wins.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
