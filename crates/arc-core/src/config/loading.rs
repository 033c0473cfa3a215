//! Configuration loading.
//!
//! Values are resolved in this order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.arc/config.toml`
//! 3. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::ArcConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Path of the user config file.
pub fn user_config_path() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
    Ok(home_dir.join(".arc").join("config.toml"))
}

/// Load the user configuration, falling back to defaults when no file exists.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if validation fails.
pub fn load() -> Result<ArcConfig, ConfigError> {
    load_from_path(&user_config_path()?)
}

/// Load configuration from `path`, falling back to defaults when it does not exist.
pub fn load_from_path(path: &Path) -> Result<ArcConfig, ConfigError> {
    let config = match fs::read_to_string(path) {
        Ok(content) => {
            toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "core.config.file_not_found",
                path = %path.display()
            );
            ArcConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    validate_config(&config)?;

    debug!(
        event = "core.config.load_completed",
        path = %path.display(),
        app = config.app.name
    );

    Ok(config)
}
