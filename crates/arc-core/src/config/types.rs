//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [app]
//! name = "Arc"
//!
//! [script]
//! timeout_secs = 30
//!
//! [focus]
//! settle_delay_ms = 1000
//! max_attempts = 10
//! retry_interval_ms = 500
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::windows::types::RetryPolicy;

/// Main configuration loaded from `~/.arc/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ArcConfig {
    /// Application being controlled
    #[serde(default)]
    pub app: AppConfig,

    /// osascript execution settings
    #[serde(default)]
    pub script: ScriptConfig,

    /// Timing of `window create --focus`
    #[serde(default)]
    pub focus: FocusConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Name passed to `tell application`.
    #[serde(default = "super::defaults::default_app_name")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptConfig {
    /// Seconds before a running osascript is killed. `0` waits forever.
    #[serde(default = "super::defaults::default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FocusConfig {
    #[serde(default = "super::defaults::default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    #[serde(default = "super::defaults::default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "super::defaults::default_retry_interval_ms")]
    pub retry_interval_ms: u64,
}

impl ArcConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            settle_delay: Duration::from_millis(self.focus.settle_delay_ms),
            max_attempts: self.focus.max_attempts,
            retry_interval: Duration::from_millis(self.focus.retry_interval_ms),
        }
    }

    pub fn script_timeout(&self) -> Option<Duration> {
        match self.script.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
