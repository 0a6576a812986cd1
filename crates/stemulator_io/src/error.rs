//! Error types for the stemulator_io crate.
//!
//! Structured error handling for lab loading, evidence export and
//! payload serialization.

use thiserror::Error;

/// Everything that can go wrong at the lab and evidence boundary.
#[derive(Error, Debug)]
pub enum IoError {
    /// A lab, payload or CSV buffer could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Reading lab files or writing evidence failed
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// Malformed lab JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structurally valid input that breaks a rule, e.g. an unsigned feedback request
    #[error("Validation error: {0}")]
    Validation(String),

    /// A lab file or directory that does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// An error annotated with the operation that produced it
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for stemulator_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    #[must_use]
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::Serialization(msg.into())
    }

    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    #[must_use]
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound(resource.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
