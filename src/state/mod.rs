//! Application state modules
//!
//! The form's request lifecycle lives in `GenerationState`; UI-only bits
//! (theme, markdown cache, keyword input buffer) live in `UiState`.

mod generation;
mod response;
mod ui;

pub use generation::GenerationState;
pub use response::{RequestError, ResponseState};
pub use ui::UiState;

/// Events that state poll methods can return.
/// These communicate results back to the app without direct mutation.
#[derive(Debug)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),

    /// Log an error message
    LogError(String),

    /// Log an info message
    LogInfo(String),
}
