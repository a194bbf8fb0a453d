//! Error types for the langlint core library
//!
//! Structural failures only: a malformed file aborts the whole run. Content
//! findings (overflow, placeholder mismatch, drift) are `Diagnostic` values
//! produced by the checker, never errors.

use crate::escape::DecodeError;
use thiserror::Error;

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for langlint operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors while opening or reading a lang file
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A directive line carried a key other than `c` or `r`
    #[error("Unknown display definition '{directive}' on line {line}")]
    UnknownDirective { directive: String, line: usize },

    /// A directive value failed to parse as an integer
    #[error("Invalid value '{value}' for display key '{key}' on line {line}")]
    DirectiveValue {
        key: String,
        value: String,
        line: usize,
    },

    /// A string line contained a malformed backslash-escape sequence
    #[error("Invalid escape sequence on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}
