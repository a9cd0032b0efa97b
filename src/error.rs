//! Error types for the Cognate library.
//!
//! All fallible operations return [`Result`], with [`CognateError`]
//! covering every failure class the crate can surface.
//!
//! # Examples
//!
//! ```
//! use cognate::error::{CognateError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CognateError::index("index has not been committed"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Cognate operations.
#[derive(Error, Debug)]
pub enum CognateError {
    /// I/O errors (reading or writing index snapshots).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index-related errors (stale state, malformed snapshots).
    #[error("Index error: {0}")]
    Index(String),

    /// Analysis-related errors (tokenization).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Entity-related errors (malformed property data).
    #[error("Entity error: {0}")]
    Entity(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error, for wrapped external producers.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CognateError.
pub type Result<T> = std::result::Result<T, CognateError>;

impl CognateError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        CognateError::Index(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        CognateError::Analysis(msg.into())
    }

    /// Create a new entity error.
    pub fn entity<S: Into<String>>(msg: S) -> Self {
        CognateError::Entity(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = CognateError::index("not committed");
        assert!(matches!(err, CognateError::Index(_)));
        assert_eq!(err.to_string(), "Index error: not committed");

        let err = CognateError::analysis("bad token stream");
        assert_eq!(err.to_string(), "Analysis error: bad token stream");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: CognateError = io_err.into();
        assert!(matches!(err, CognateError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u64>("not json").unwrap_err();
        let err: CognateError = json_err.into();
        assert!(matches!(err, CognateError::Json(_)));
    }
}
