//! Recording executor for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::script::{ScriptError, ScriptExecutor};

/// Replays queued responses in order and records every payload it receives.
///
/// Running out of queued responses is a test bug and panics.
#[derive(Default)]
pub(crate) struct MockExecutor {
    responses: RefCell<VecDeque<Result<String, ScriptError>>>,
    scripts: RefCell<Vec<String>>,
}

impl MockExecutor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, output: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(output.to_string()));
        self
    }

    pub(crate) fn fail(self, error: ScriptError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub(crate) fn scripts(&self) -> Vec<String> {
        self.scripts.borrow().clone()
    }
}

impl ScriptExecutor for MockExecutor {
    fn execute(&self, script: &str) -> Result<String, ScriptError> {
        self.scripts.borrow_mut().push(script.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected script executed:\n{}", script))
    }
}
