//! Error types for the Community API adapter.

use serde_json::{json, Value};
use thiserror::Error;

/// Main error type for adapter operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Tool name is not in the catalog
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Tool arguments are missing or malformed
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool requires a session token and none is held
    #[error("Not authenticated: '{0}' requires a session, call 'login' first")]
    Unauthenticated(String),

    /// API returned an error
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Stable machine-readable kind of the error.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::UnknownTool(_) => "unknown_tool",
            Error::InvalidArguments(_) => "invalid_arguments",
            Error::Unauthenticated(_) => "unauthenticated",
            Error::Api { .. } => "api_error",
            Error::Http(_) => "transport_error",
            Error::Serialization(_) => "serialization_error",
            Error::Config(_) => "config_error",
            Error::Other(_) => "internal_error",
        }
    }

    /// Remote status code, present only for API errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured descriptor returned to the agent host.
    ///
    /// API errors carry the remote message verbatim; everything else carries
    /// the display string.
    pub fn to_descriptor(&self) -> Value {
        let message = match self {
            Error::Api { message, .. } => message.clone(),
            other => other.to_string(),
        };

        let mut descriptor = json!({
            "error": message,
            "kind": self.kind(),
        });
        if let Some(status) = self.status_code() {
            descriptor["status_code"] = json!(status);
        }
        descriptor
    }
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, Error>;
