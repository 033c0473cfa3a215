//! Synchronous AppleScript execution.

use std::time::Duration;

use tracing::debug;

use crate::script::errors::ScriptError;

/// Sends a payload to the automation host and returns its raw stdout.
///
/// A payload that runs to completion is `Ok` whatever it returns; only a
/// host that cannot be reached or reports a runtime fault yields an error.
pub trait ScriptExecutor {
    fn execute(&self, script: &str) -> Result<String, ScriptError>;
}

/// Runs payloads through `osascript -e`.
#[derive(Debug, Clone, Default)]
pub struct OsascriptExecutor {
    timeout: Option<Duration>,
}

impl OsascriptExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill `osascript` and fail with `ScriptError::TimedOut` once `timeout` elapses.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[cfg(target_os = "macos")]
impl ScriptExecutor for OsascriptExecutor {
    fn execute(&self, script: &str) -> Result<String, ScriptError> {
        use std::process::{Command, Stdio};
        use tracing::warn;

        debug!(
            event = "core.script.execute_started",
            script_len = script.len(),
            timeout_ms = self.timeout.map(|t| t.as_millis() as u64)
        );

        let child = Command::new("osascript")
            .arg("-e")
            .arg(script)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ScriptError::Spawn {
                message: e.to_string(),
            })?;

        let output = match self.timeout {
            Some(timeout) => wait_with_timeout(child, timeout)?,
            None => child.wait_with_output()?,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                event = "core.script.execute_failed",
                exit_code = ?output.status.code(),
                stderr = %stderr
            );
            return Err(ScriptError::Failed { stderr });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        debug!(
            event = "core.script.execute_completed",
            output_len = stdout.len()
        );

        Ok(stdout)
    }
}

#[cfg(not(target_os = "macos"))]
impl ScriptExecutor for OsascriptExecutor {
    fn execute(&self, _script: &str) -> Result<String, ScriptError> {
        debug!(event = "core.script.unsupported_platform");
        Err(ScriptError::UnsupportedPlatform)
    }
}

/// Wait for `child` to exit, killing it after `timeout`.
///
/// Pipes are drained on helper threads so a chatty script cannot block on a
/// full pipe while we poll for its exit.
#[cfg(target_os = "macos")]
fn wait_with_timeout(
    mut child: std::process::Child,
    timeout: Duration,
) -> Result<std::process::Output, ScriptError> {
    use std::io::Read;
    use std::time::Instant;

    fn drain<R: Read + Send + 'static>(
        pipe: Option<R>,
    ) -> std::thread::JoinHandle<std::io::Result<Vec<u8>>> {
        std::thread::spawn(move || {
            let mut buf = Vec::new();
            if let Some(mut pipe) = pipe {
                pipe.read_to_end(&mut buf)?;
            }
            Ok(buf)
        })
    }

    let stdout_reader = drain(child.stdout.take());
    let stderr_reader = drain(child.stderr.take());

    let deadline = Instant::now() + timeout;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            tracing::warn!(
                event = "core.script.execute_timed_out",
                timeout_ms = timeout.as_millis() as u64
            );
            // Already-exited races are fine; the wait below reaps either way.
            let _ = child.kill();
            child.wait()?;
            return Err(ScriptError::TimedOut {
                timeout_ms: timeout.as_millis() as u64,
            });
        }
        std::thread::sleep(Duration::from_millis(20));
    };

    let join = |handle: std::thread::JoinHandle<std::io::Result<Vec<u8>>>| {
        handle
            .join()
            .map_err(|_| ScriptError::Spawn {
                message: "osascript output reader panicked".to_string(),
            })?
            .map_err(ScriptError::from)
    };

    Ok(std::process::Output {
        status,
        stdout: join(stdout_reader)?,
        stderr: join(stderr_reader)?,
    })
}
