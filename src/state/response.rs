//! What the response panel is currently showing

use thiserror::Error;

use crate::form::ValidationError;
use crate::service::GenerateError;

/// Error shown to the user in place of a response
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid request. Please check your input.")]
    BadRequest,

    #[error("An error occurred. Please try again later.")]
    Transport,
}

impl From<&GenerateError> for RequestError {
    fn from(err: &GenerateError) -> Self {
        if err.is_bad_request() {
            RequestError::BadRequest
        } else {
            RequestError::Transport
        }
    }
}

/// Response panel state; exactly one variant is active at a time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResponseState {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(RequestError),
}

impl ResponseState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResponseState::Loading)
    }

    /// Generated text, if the last request succeeded
    pub fn text(&self) -> Option<&str> {
        match self {
            ResponseState::Success(text) => Some(text),
            _ => None,
        }
    }

    /// Error to display, if any
    pub fn error(&self) -> Option<RequestError> {
        match self {
            ResponseState::Error(err) => Some(*err),
            _ => None,
        }
    }
}
