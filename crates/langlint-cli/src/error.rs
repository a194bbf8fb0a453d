//! Error types and handling for the CLI
//!
//! Every structural failure exits with code 1; content findings never reach
//! this module - they are diagnostics, not errors.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the langlint-core library
    #[error("{0}")]
    Core(#[from] langlint_core::Error),

    /// Lang file not found
    #[error("Lang file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// JSON serialization error in the diagnostic stream
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error.
    ///
    /// Diagnostics never affect the exit status; any structural failure
    /// terminates the run with code 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
