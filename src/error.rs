//! Error types for the malche library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`MalcheError`] enum.
//!
//! # Examples
//!
//! ```
//! use malche::error::{MalcheError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MalcheError::analysis("analyzer produced no output"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("ok"),
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for malche operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides constructor helpers for the string-carrying variants.
#[derive(Error, Debug)]
pub enum MalcheError {
    /// I/O errors (rule-file loading, dictionary access).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Morphological analysis errors (segmentation, dictionary loading).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Rule-set configuration errors.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`MalcheError`].
pub type Result<T> = std::result::Result<T, MalcheError>;

impl MalcheError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        MalcheError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MalcheError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = MalcheError::analysis("segmenter failed");
        assert_eq!(error.to_string(), "Analysis error: segmenter failed");

        let error = MalcheError::config("empty combine rule");
        assert_eq!(error.to_string(), "Config error: empty combine rule");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = MalcheError::from(io_error);

        match error {
            MalcheError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
