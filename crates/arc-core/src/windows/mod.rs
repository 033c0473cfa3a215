pub mod errors;
pub mod handler;
pub mod interpret;
pub mod probe;
pub mod scripts;
pub mod types;

pub use errors::WindowError;
pub use interpret::interpret_focus_output;
pub use probe::probe_process_state;
pub use types::{
    CreateWindowRequest, ProcessState, RetryPolicy, SearchQuery, Sentinel, Window,
};
