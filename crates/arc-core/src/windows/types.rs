use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::script::applescript_escape;

/// A browser window as reported by the list payload.
///
/// `id` is the window's index at listing time and is what `close` accepts;
/// it is not stable across relaunches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub id: i64,
    pub title: String,
}

/// Whether the application was alive before this invocation touched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessState {
    was_running: bool,
}

impl ProcessState {
    pub fn new(was_running: bool) -> Self {
        Self { was_running }
    }

    pub fn was_running(&self) -> bool {
        self.was_running
    }
}

/// Timing of the in-host title search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Wait after creating the window, before the first scan.
    pub settle_delay: Duration,
    /// Number of full tab scans.
    pub max_attempts: u32,
    /// Wait between scans; never applied after the last one.
    pub retry_interval: Duration,
}

impl RetryPolicy {
    pub const DEFAULT: RetryPolicy = RetryPolicy {
        settle_delay: Duration::from_millis(1000),
        max_attempts: 10,
        retry_interval: Duration::from_millis(500),
    };

    /// Total time spent waiting before a `not_found` result, excluding the
    /// time the host needs to scan tabs. `None` if it overflows a `Duration`.
    pub fn worst_case_wait(&self) -> Option<Duration> {
        self.retry_interval
            .checked_mul(self.max_attempts.saturating_sub(1))?
            .checked_add(self.settle_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Machine-readable result of the focus payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    Found,
    NotFound,
}

impl Sentinel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentinel::Found => "found",
            Sentinel::NotFound => "not_found",
        }
    }

    /// Parse trimmed payload output; `None` for anything unrecognized.
    pub fn parse(output: &str) -> Option<Self> {
        match output.trim() {
            "found" => Some(Sentinel::Found),
            "not_found" => Some(Sentinel::NotFound),
            _ => None,
        }
    }
}

/// A user-supplied tab title fragment, kept alongside its embeddable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    escaped: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let escaped = applescript_escape(&raw);
        Self { raw, escaped }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn escaped(&self) -> &str {
        &self.escaped
    }
}

/// Parameters of `window create`.
#[derive(Debug, Clone, Default)]
pub struct CreateWindowRequest {
    pub url: Option<String>,
    pub incognito: bool,
    pub focus: Option<String>,
}

impl CreateWindowRequest {
    pub fn new(url: Option<String>) -> Self {
        Self {
            url,
            ..Self::default()
        }
    }

    pub fn with_incognito(mut self, incognito: bool) -> Self {
        self.incognito = incognito;
        self
    }

    pub fn with_focus(mut self, focus: Option<String>) -> Self {
        self.focus = focus;
        self
    }

    /// The search string, if focusing was requested with a non-empty value.
    pub fn focus_query(&self) -> Option<&str> {
        self.focus.as_deref().filter(|s| !s.is_empty())
    }
}
