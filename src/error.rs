//! Error Types
//!
//! The server answers every failure with the same undifferentiated status, so
//! screens treat any `ApiError` as one opaque failure. The variants only feed
//! log lines.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("could not read response: {0}")]
    Decode(String),

    #[error("could not build request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if e.is_builder() {
            ApiError::Encode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Presence checks run before any request leaves the browser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please select a provider")]
    ProviderRequired,
}

/// Outcome of a failed form submit
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
