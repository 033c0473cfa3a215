//! AppleScript payloads sent to the browser.
//!
//! Templates use `{name}` placeholders filled with `str::replace`. Every
//! value that ends up inside a string literal goes through
//! `applescript_escape` first, and the user's search string is always
//! substituted last so text like `{app}` inside it is never expanded.

use std::time::Duration;

use crate::script::applescript_escape;
use crate::windows::types::{RetryPolicy, SearchQuery};

/// Creates a window, lets it settle, then scans the front window's tabs for a
/// title containing `{search}` up to `{max_attempts}` times.
///
/// A tab whose title cannot be read is skipped without aborting the scan.
/// Returns `found` as soon as a tab is selected, `not_found` once every
/// attempt is exhausted. The app is activated on both paths.
const FOCUS_SCRIPT: &str = r#"tell application "{app}"
    {make_window}
    delay {settle_delay}
    set maxRetries to {max_attempts}
    repeat with attempt from 1 to maxRetries
        tell front window
            set tabIndex to 1
            repeat with aTab in every tab
                try
                    set tabTitle to title of aTab
                    ignoring case
                        if tabTitle contains "{search}" then
                            tell tab tabIndex to select
                            activate
                            return "found"
                        end if
                    end ignoring
                end try
                set tabIndex to tabIndex + 1
            end repeat
        end tell
        if attempt < maxRetries then delay {retry_interval}
    end repeat
    activate
    return "not_found"
end tell"#;

/// Closes every window but the first, newest index first so indices stay valid.
const CLOSE_EXTRA_WINDOWS_SCRIPT: &str = r#"tell application "{app}"
    set windowCount to count of windows
    repeat with i from windowCount to 2 by -1
        close window i
    end repeat
end tell"#;

const IS_RUNNING_SCRIPT: &str = r#"application "{app}" is running"#;

const CREATE_WINDOW_SCRIPT: &str = r#"tell application "{app}"
    make new window
end tell"#;

const CREATE_INCOGNITO_WINDOW_SCRIPT: &str = r#"tell application "{app}"
    make new window with properties {incognito:true}
    activate
end tell"#;

const OPEN_TAB_SCRIPT: &str = r#"tell application "{app}"
    tell front window
        make new tab with properties {URL:"{url}"}
    end tell
end tell"#;

const ACTIVATE_SCRIPT: &str = r#"tell application "{app}" to activate"#;

const CLOSE_FRONT_WINDOW_SCRIPT: &str = r#"tell application "{app}" to tell front window to close"#;

const CLOSE_WINDOW_SCRIPT: &str = r#"tell application "{app}" to tell window {window_id} to close"#;

/// Emits `[{"id": <index>, "title": "..."}]` for every window of `{app}`.
const LIST_WINDOWS_SCRIPT: &str = include_str!("scripts/list-windows.applescript");

fn for_app(template: &str, app: &str) -> String {
    template.replace("{app}", &applescript_escape(app))
}

/// AppleScript `delay` takes fractional seconds.
fn seconds(duration: Duration) -> String {
    format!("{}", duration.as_secs_f64())
}

pub fn focus_script(
    app: &str,
    incognito: bool,
    query: &SearchQuery,
    policy: &RetryPolicy,
) -> String {
    let make_window = if incognito {
        "make new window with properties {incognito:true}"
    } else {
        "make new window"
    };

    for_app(FOCUS_SCRIPT, app)
        .replace("{make_window}", make_window)
        .replace("{settle_delay}", &seconds(policy.settle_delay))
        .replace("{max_attempts}", &policy.max_attempts.to_string())
        .replace("{retry_interval}", &seconds(policy.retry_interval))
        .replace("{search}", query.escaped())
}

pub fn close_extra_windows_script(app: &str) -> String {
    for_app(CLOSE_EXTRA_WINDOWS_SCRIPT, app)
}

pub fn is_running_script(app: &str) -> String {
    for_app(IS_RUNNING_SCRIPT, app)
}

pub fn create_window_script(app: &str, incognito: bool) -> String {
    if incognito {
        for_app(CREATE_INCOGNITO_WINDOW_SCRIPT, app)
    } else {
        for_app(CREATE_WINDOW_SCRIPT, app)
    }
}

pub fn open_tab_script(app: &str, url: &str) -> String {
    for_app(OPEN_TAB_SCRIPT, app).replace("{url}", &applescript_escape(url))
}

pub fn activate_script(app: &str) -> String {
    for_app(ACTIVATE_SCRIPT, app)
}

pub fn close_window_script(app: &str, window_id: Option<i64>) -> String {
    match window_id {
        Some(id) => for_app(CLOSE_WINDOW_SCRIPT, app).replace("{window_id}", &id.to_string()),
        None => for_app(CLOSE_FRONT_WINDOW_SCRIPT, app),
    }
}

pub fn list_windows_script(app: &str) -> String {
    for_app(LIST_WINDOWS_SCRIPT, app)
}
