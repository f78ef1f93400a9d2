//! Error types for stroke risk intake

use thiserror::Error;

/// Intake error
///
/// Raised only while turning a raw request body into [`crate::PatientAttributes`].
/// Scoring a typed record never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// Body is not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Body is valid JSON but not an object
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
