//! Unified error types for the ecast workspace
//!
//! [`EcastError`] covers the loading and configuration boundaries of the
//! toolkit. The forecast engine itself never fails: unknown countries and
//! degenerate series are absorbed locally, so only dataset parsing,
//! validation and configuration surface errors to callers.
//!
//! # Example
//!
//! ```ignore
//! use ecast_core::{EcastResult, HistoricalSeries};
//!
//! fn load(path: &str) -> EcastResult<HistoricalSeries> {
//!     let records = read_records(path)?;
//!     HistoricalSeries::new(records)
//! }
//! ```

use thiserror::Error;

/// Unified error type for all ecast operations.
#[derive(Error, Debug)]
pub enum EcastError {
    /// I/O errors (file access, directory listing, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing/deserialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Historical series invariant violations
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using EcastError.
pub type EcastResult<T> = Result<T, EcastError>;

impl From<anyhow::Error> for EcastError {
    fn from(err: anyhow::Error) -> Self {
        EcastError::Other(format!("{err:#}"))
    }
}

impl From<String> for EcastError {
    fn from(s: String) -> Self {
        EcastError::Other(s)
    }
}

impl From<&str> for EcastError {
    fn from(s: &str) -> Self {
        EcastError::Other(s.to_string())
    }
}

impl From<serde_json::Error> for EcastError {
    fn from(err: serde_json::Error) -> Self {
        EcastError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EcastError::Validation("years must be contiguous".into());
        assert!(err.to_string().contains("Validation error"));
        assert!(err.to_string().contains("contiguous"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EcastError = io_err.into();
        assert!(matches!(err, EcastError::Io(_)));
    }

    #[test]
    fn test_json_error_is_parse() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
        let err: EcastError = json_err.into();
        assert!(matches!(err, EcastError::Parse(_)));
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> EcastResult<()> {
            Err(EcastError::Config("bad horizon".into()))
        }

        fn outer() -> EcastResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
