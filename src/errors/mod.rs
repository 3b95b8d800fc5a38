//! # Error Handling
//!
//! This module provides error handling for the Washboard client toolkit.
//! It defines custom error types using `thiserror` covering configuration,
//! transport, collaborator-reported API failures, and state-machine misuse.

use crate::validation::FieldError;

/// Custom result type for Washboard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fallback text surfaced when the collaborator cannot be reached at all.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Main error type for the Washboard client toolkit
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network transport errors (connect failures, timeouts, dropped sockets)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Collaborator responded with a `success: false` envelope
    #[error("API error: {message}")]
    Api {
        message: String,
        /// Field-level errors the collaborator attached, if any. Carried for
        /// callers that merge them into per-field display; nothing in this
        /// crate consumes them.
        field_errors: Vec<FieldError>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {context}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        context: String,
    },

    /// `submit()` was called while a submission is already in flight
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// `submit()` was called from the `success` state; `reset()` is the only
    /// exit from `success`
    #[error("Previous submission succeeded; call reset() before submitting again")]
    AlreadySucceeded,

    /// `reset()` was called while a submission is in flight
    #[error("reset() called while a submission is in flight")]
    ResetWhileSubmitting,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }

    /// Create a collaborator-reported API error without field detail
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api { message: message.into(), field_errors: Vec::new() }
    }

    /// Create a serialization error with context
    pub fn serialization<S: Into<String>>(source: serde_json::Error, context: S) -> Self {
        Self::Serialization { source, context: context.into() }
    }

    /// The user-facing message for this error, as the submission state
    /// machine surfaces it: collaborator-supplied text for business
    /// failures, fixed fallback text for everything else.
    pub fn submission_message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            _ => TRANSPORT_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Transport(format!("Request timed out: {}", err))
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map_or_else(|| "Invalid value".to_string(), |m| m.to_string())
                    })
                    .collect();
                format!("{}: {}", field, messages.join(", "))
            })
            .collect::<Vec<_>>()
            .join("; ");

        Error::Config(format!("Validation failed: {}", message))
    }
}
