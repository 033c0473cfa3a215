use tracing::warn;

use arc_core::{ArcConfig, OsascriptExecutor};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> ArcConfig {
    match ArcConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.arc/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            ArcConfig::default()
        }
    }
}

/// Executor honoring the configured script timeout.
pub fn executor_for(config: &ArcConfig) -> OsascriptExecutor {
    OsascriptExecutor::new().with_timeout(config.script_timeout())
}
