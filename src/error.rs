//! Custom error types for Linqkeun
//!
//! This module defines the error hierarchy for the client using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Linqkeun operations
#[derive(Error, Debug)]
pub enum ErpError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP request could not be sent or completed
    #[error("Request failed: {0}")]
    Request(String),

    /// The response body was not valid JSON
    #[error("Response error: {0}")]
    Response(String),

    /// The JSON body did not have the expected shape
    #[error("Could not decode {resource}: {message}")]
    Decode {
        resource: &'static str,
        message: String,
    },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl ErpError {
    /// Create a decode error for a resource list
    pub fn decode(resource: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            resource,
            message: message.into(),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ErpError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ErpError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Linqkeun operations
pub type ErpResult<T> = Result<T, ErpError>;
