use tracing::warn;

use crate::windows::errors::WindowError;
use crate::windows::types::{SearchQuery, Sentinel};

/// Turn the focus payload's output into success or `TabNotFound`.
///
/// Only `not_found` fails. Unrecognized output is logged and treated as
/// success.
pub fn interpret_focus_output(output: &str, query: &SearchQuery) -> Result<(), WindowError> {
    match Sentinel::parse(output) {
        Some(Sentinel::Found) => Ok(()),
        Some(Sentinel::NotFound) => Err(WindowError::TabNotFound {
            search: query.raw().to_string(),
        }),
        None => {
            warn!(
                event = "core.window.focus_output_unrecognized",
                output = %output.trim()
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_is_ok() {
        let query = SearchQuery::new("Gmail");
        assert!(interpret_focus_output("found\n", &query).is_ok());
    }

    #[test]
    fn test_not_found_names_search() {
        let query = SearchQuery::new("NoSuchTab");
        let err = interpret_focus_output("not_found\n", &query).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no tab found with title containing \"NoSuchTab\""
        );
    }

    #[test]
    fn test_not_found_uses_raw_search() {
        let query = SearchQuery::new(r#"He said "hi" \o/"#);
        let err = interpret_focus_output("not_found", &query).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(r#"He said "hi" \o/"#), "got: {}", message);
        assert!(!message.contains(query.escaped()), "got: {}", message);
    }

    #[test]
    fn test_unrecognized_output_is_ok() {
        let query = SearchQuery::new("Gmail");
        assert!(interpret_focus_output("", &query).is_ok());
        assert!(interpret_focus_output("missing value", &query).is_ok());
    }
}
