pub mod errors;
pub mod escape;
pub mod executor;

#[cfg(test)]
pub(crate) mod testing;

pub use errors::ScriptError;
pub use escape::applescript_escape;
pub use executor::{OsascriptExecutor, ScriptExecutor};
