use tracing::{debug, info, warn};

use crate::config::ArcConfig;
use crate::script::ScriptExecutor;
use crate::windows::errors::WindowError;
use crate::windows::interpret::interpret_focus_output;
use crate::windows::probe::probe_process_state;
use crate::windows::scripts;
use crate::windows::types::{CreateWindowRequest, SearchQuery, Window};

/// Create a window, optionally opening `url` in it.
///
/// With a non-empty `focus` the request goes through
/// [`create_window_with_focus`] instead and `url` is ignored.
pub fn create_window(
    executor: &dyn ScriptExecutor,
    config: &ArcConfig,
    request: &CreateWindowRequest,
) -> Result<(), WindowError> {
    if let Some(search) = request.focus_query() {
        if let Some(url) = &request.url {
            warn!(
                event = "core.window.create_url_ignored",
                url = %url,
                message = "URL is not opened when --focus is set"
            );
        }
        return create_window_with_focus(executor, config, request.incognito, search);
    }

    let app = config.app.name.as_str();
    info!(
        event = "core.window.create_started",
        app = app,
        incognito = request.incognito,
        url = ?request.url
    );

    executor.execute(&scripts::create_window_script(app, request.incognito))?;

    if let Some(url) = &request.url {
        executor.execute(&scripts::open_tab_script(app, url))?;
    }

    executor.execute(&scripts::activate_script(app))?;

    info!(event = "core.window.create_completed", app = app);
    Ok(())
}

/// Create a window and select the first tab whose title contains `search`.
///
/// The search itself runs inside the host as a single payload. When the app
/// was not running beforehand, the extra windows its startup opened are
/// closed afterwards, whether or not a tab matched. A `TabNotFound` error is
/// only returned once that cleanup is done.
pub fn create_window_with_focus(
    executor: &dyn ScriptExecutor,
    config: &ArcConfig,
    incognito: bool,
    search: &str,
) -> Result<(), WindowError> {
    let app = config.app.name.as_str();
    let policy = config.retry_policy();

    // Must run before the focus payload: `tell application` launches the app.
    let state = probe_process_state(executor, app);

    info!(
        event = "core.window.focus_started",
        app = app,
        incognito = incognito,
        search = search,
        was_running = state.was_running(),
        max_attempts = policy.max_attempts,
        worst_case_wait_ms = ?policy.worst_case_wait().map(|d| d.as_millis() as u64)
    );

    let query = SearchQuery::new(search);
    let output = executor.execute(&scripts::focus_script(app, incognito, &query, &policy))?;

    if !state.was_running() {
        close_extra_windows(executor, app)?;
    }

    interpret_focus_output(&output, &query)?;

    info!(
        event = "core.window.focus_completed",
        app = app,
        search = search
    );
    Ok(())
}

/// Close every window except the first one.
pub fn close_extra_windows(executor: &dyn ScriptExecutor, app: &str) -> Result<(), WindowError> {
    debug!(event = "core.window.cleanup_started", app = app);
    executor.execute(&scripts::close_extra_windows_script(app))?;
    info!(event = "core.window.cleanup_completed", app = app);
    Ok(())
}

/// Close windows by id, or the front window when `ids` is empty.
///
/// Ids are parsed and closed one at a time; the first invalid id or failed
/// close stops the loop and windows closed before it stay closed.
pub fn close_windows<S: AsRef<str>>(
    executor: &dyn ScriptExecutor,
    config: &ArcConfig,
    ids: &[S],
) -> Result<(), WindowError> {
    let app = config.app.name.as_str();

    if ids.is_empty() {
        executor.execute(&scripts::close_window_script(app, None))?;
        info!(event = "core.window.close_completed", app = app, target = "front");
        return Ok(());
    }

    for raw in ids {
        let raw = raw.as_ref();
        let window_id: i64 = raw
            .parse()
            .map_err(|_| WindowError::InvalidWindowId {
                value: raw.to_string(),
            })?;

        executor.execute(&scripts::close_window_script(app, Some(window_id)))?;
        info!(
            event = "core.window.close_completed",
            app = app,
            window_id = window_id
        );
    }

    Ok(())
}

/// List the app's windows.
pub fn list_windows(
    executor: &dyn ScriptExecutor,
    config: &ArcConfig,
) -> Result<Vec<Window>, WindowError> {
    let app = config.app.name.as_str();
    let output = executor.execute(&scripts::list_windows_script(app))?;
    let windows = parse_window_list(&output)?;

    debug!(
        event = "core.window.list_completed",
        app = app,
        count = windows.len()
    );

    Ok(windows)
}

fn parse_window_list(output: &str) -> Result<Vec<Window>, WindowError> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(trimmed).map_err(|e| WindowError::ListParse {
        message: e.to_string(),
    })
}
