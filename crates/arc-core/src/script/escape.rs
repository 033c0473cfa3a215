//! String escaping for values embedded in AppleScript string literals.

/// Escape a string for use between double quotes in AppleScript.
///
/// Backslashes are doubled first, then every double quote gets a leading
/// backslash. Nothing else is rewritten: AppleScript string literals may span
/// lines, so newlines and other control characters pass through as-is.
pub fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
