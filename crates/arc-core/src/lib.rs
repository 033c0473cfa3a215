//! arc-core: scripted window control for the Arc browser
//!
//! Every operation is an AppleScript payload sent through a
//! [`ScriptExecutor`]. The CLI uses [`OsascriptExecutor`]; tests substitute
//! their own.
//!
//! # Main Entry Points
//!
//! - [`window_ops`] - Create, focus, close and list windows
//! - [`config`] - Configuration loading
//! - [`script`] - Payload execution and string escaping

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod script;
pub mod windows;

// Re-export commonly used types at crate root for convenience
pub use config::ArcConfig;
pub use errors::{ArcError, ConfigError};
pub use script::{OsascriptExecutor, ScriptError, ScriptExecutor};
pub use windows::{CreateWindowRequest, RetryPolicy, Window, WindowError};

pub use windows::handler as window_ops;

pub use logging::init_logging;
