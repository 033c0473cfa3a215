use crate::errors::ArcError;

/// Failures of the automation host itself while running a payload.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("AppleScript is only available on macOS")]
    UnsupportedPlatform,

    #[error("Failed to execute osascript: {message}")]
    Spawn { message: String },

    #[error("AppleScript failed with error: {stderr}")]
    Failed { stderr: String },

    #[error("AppleScript did not finish within {timeout_ms}ms")]
    TimedOut { timeout_ms: u64 },

    #[error("IO error during script execution: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ArcError for ScriptError {
    fn error_code(&self) -> &'static str {
        match self {
            ScriptError::UnsupportedPlatform => "UNSUPPORTED_PLATFORM",
            ScriptError::Spawn { .. } => "APPLESCRIPT_EXECUTION_FAILED",
            ScriptError::Failed { .. } => "APPLESCRIPT_FAILED",
            ScriptError::TimedOut { .. } => "APPLESCRIPT_TIMED_OUT",
            ScriptError::IoError { .. } => "SCRIPT_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ScriptError::UnsupportedPlatform | ScriptError::Failed { .. }
        )
    }
}
