//! Default values for configuration types.
//!
//! The free functions are used by serde `#[serde(default = "...")]` attributes.

use crate::config::types::{AppConfig, FocusConfig, ScriptConfig};
use crate::windows::types::RetryPolicy;

pub fn default_app_name() -> String {
    "Arc".to_string()
}

/// Comfortably above the default focus policy's 5.5s worst case.
pub fn default_timeout_secs() -> u64 {
    30
}

pub fn default_settle_delay_ms() -> u64 {
    RetryPolicy::DEFAULT.settle_delay.as_millis() as u64
}

pub fn default_max_attempts() -> u32 {
    RetryPolicy::DEFAULT.max_attempts
}

pub fn default_retry_interval_ms() -> u64 {
    RetryPolicy::DEFAULT.retry_interval.as_millis() as u64
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            max_attempts: default_max_attempts(),
            retry_interval_ms: default_retry_interval_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ArcConfig;
    use crate::windows::types::RetryPolicy;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = ArcConfig::default();
        assert_eq!(config.app.name, "Arc");
        assert_eq!(config.script.timeout_secs, 30);
        assert_eq!(config.retry_policy(), RetryPolicy::DEFAULT);
        assert_eq!(config.script_timeout(), Some(Duration::from_secs(30)));
    }
}
