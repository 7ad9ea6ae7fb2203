use std::io;

use crate::interfaces::RawResponse;

/// Errors that can occur while orchestrating archive commands
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Network error: {0}")]
    NetworkError(#[source] TransportError),

    #[error("Response error (HTTP {}): {message}", response.status)]
    ResponseError {
        message: String,
        response: RawResponse,
    },

    #[error("Archive operation failed: {}", .0.as_deref().unwrap_or("no error reported"))]
    ApplicationFailure(Option<String>),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Reasons a selection or user input cannot become a request.
///
/// These never reach the user as a dialog; the controller logs them and
/// goes back to idle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("nothing is selected")]
    EmptySelection,

    #[error("select exactly one archive file (found {0} selected entries)")]
    SelectionCount(usize),

    #[error("`{0}` is not a supported archive format (.zip)")]
    NotAnArchive(String),

    #[error("archive name is empty")]
    EmptyName,
}

/// Connection-level failure raised by a transport before any response exists
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap the underlying cause, keeping its message
    pub fn from_source<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type alias for archive command operations
pub type Result<T> = std::result::Result<T, Error>;
