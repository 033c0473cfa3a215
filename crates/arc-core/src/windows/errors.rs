use crate::errors::ArcError;
use crate::script::ScriptError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error("no tab found with title containing \"{search}\"")]
    TabNotFound { search: String },

    #[error("Invalid window id '{value}': expected an integer")]
    InvalidWindowId { value: String },

    #[error("Failed to parse window list: {message}")]
    ListParse { message: String },
}

impl ArcError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::Script(e) => e.error_code(),
            WindowError::TabNotFound { .. } => "TAB_NOT_FOUND",
            WindowError::InvalidWindowId { .. } => "INVALID_WINDOW_ID",
            WindowError::ListParse { .. } => "WINDOW_LIST_PARSE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            WindowError::Script(e) => e.is_user_error(),
            WindowError::TabNotFound { .. } | WindowError::InvalidWindowId { .. } => true,
            WindowError::ListParse { .. } => false,
        }
    }
}
