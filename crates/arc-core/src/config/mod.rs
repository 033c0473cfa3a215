//! # Configuration
//!
//! TOML configuration for the arc CLI, read from `~/.arc/config.toml`.
//! A missing file means defaults; a malformed one is an error the caller
//! decides how to surface.
//!
//! ```rust,no_run
//! use arc_core::config::ArcConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ArcConfig::load()?;
//!     let policy = config.retry_policy();
//!     println!("worst case: {:?}", policy.worst_case_wait());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{AppConfig, ArcConfig, FocusConfig, ScriptConfig};
pub use validation::validate_config;

impl ArcConfig {
    /// Load the user configuration.
    ///
    /// See [`loading::load`] for details.
    pub fn load() -> Result<Self, crate::errors::ConfigError> {
        loading::load()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
