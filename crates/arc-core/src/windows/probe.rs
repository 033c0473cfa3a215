use tracing::{debug, warn};

use crate::script::ScriptExecutor;
use crate::windows::scripts::is_running_script;
use crate::windows::types::ProcessState;

/// Ask the host whether `app` is running, before anything launches it.
///
/// Only a successful query answering exactly `false` counts as not running.
/// Errors and unexpected output report the app as running, which at worst
/// skips the post-launch window cleanup.
pub fn probe_process_state(executor: &dyn ScriptExecutor, app: &str) -> ProcessState {
    match executor.execute(&is_running_script(app)) {
        Ok(output) => {
            let was_running = output.trim() != "false";
            debug!(
                event = "core.window.probe_completed",
                app = app,
                was_running = was_running,
                output = %output.trim()
            );
            ProcessState::new(was_running)
        }
        Err(e) => {
            warn!(
                event = "core.window.probe_failed",
                app = app,
                error = %e,
                message = "Assuming app was already running"
            );
            ProcessState::new(true)
        }
    }
}
