use crate::config::types::ArcConfig;
use crate::errors::ConfigError;

/// Validate the configuration.
///
/// A script timeout must outlast the focus payload's own waiting, or every
/// unsuccessful search would surface as a timeout instead of `not_found`.
pub fn validate_config(config: &ArcConfig) -> Result<(), ConfigError> {
    if config.app.name.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "app.name must not be empty".to_string(),
        });
    }

    if config.focus.max_attempts == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "focus.max_attempts must be at least 1".to_string(),
        });
    }

    let Some(worst_case) = config.retry_policy().worst_case_wait() else {
        return Err(ConfigError::InvalidConfiguration {
            message: "focus settle_delay_ms + (max_attempts - 1) * retry_interval_ms is too large"
                .to_string(),
        });
    };

    if let Some(timeout) = config.script_timeout() {
        if timeout <= worst_case {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "script.timeout_secs ({}s) must exceed the focus search worst case ({:.1}s)",
                    timeout.as_secs(),
                    worst_case.as_secs_f64()
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ArcConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_app_name_rejected() {
        let mut config = ArcConfig::default();
        config.app.name = "  ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("app.name"));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let mut config = ArcConfig::default();
        config.focus.max_attempts = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("focus.max_attempts"));
    }

    #[test]
    fn test_timeout_must_exceed_worst_case() {
        let mut config = ArcConfig::default();
        config.script.timeout_secs = 5;
        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: script.timeout_secs (5s) must exceed the focus search worst case (5.5s)"
        );

        config.script.timeout_secs = 6;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_timeout_disables_check() {
        let mut config = ArcConfig::default();
        config.script.timeout_secs = 0;
        config.focus.max_attempts = 1000;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_unrepresentable_focus_wait_rejected() {
        let mut config = ArcConfig::default();
        config.focus.retry_interval_ms = u64::MAX;
        config.focus.max_attempts = u32::MAX;

        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("too large"));

        config.script.timeout_secs = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
    }
}
