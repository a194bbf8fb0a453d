//! Langlint Core - display-geometry linting for firmware localization files
//!
//! This crate parses the line-oriented lang file format used for embedded
//! device UI strings and checks every translation against the display
//! geometry its record declares.
//!
//! # Main Components
//!
//! - **Escape Decoder**: turns literal backslash sequences into real characters
//! - **Text Wrapper**: greedy word-wrap, the same break logic the firmware uses
//! - **Record Parser**: streams 4-line frames as [`Record`] values
//! - **Record Checker**: pure heuristics producing [`Diagnostic`] values
//!
//! # Example
//!
//! ```
//! use langlint_core::{run_checks, Parser};
//!
//! let file = "MSG_OK c=20 r=1\n\"OK\"\n\"OK\"\n";
//! for record in Parser::new(file.as_bytes()) {
//!     let record = record?;
//!     assert!(run_checks(&record).is_empty());
//! }
//! # Ok::<(), langlint_core::Error>(())
//! ```

pub mod checks;
pub mod error;
pub mod escape;
pub mod parser;
pub mod types;
pub mod wrap;

// Re-export main types for convenience
pub use checks::run_checks;
pub use error::{Error, Result};
pub use escape::{decode, DecodeError};
pub use parser::Parser;
pub use types::{
    CheckKind, Diagnostic, Geometry, Record, Severity, TextDisplay, MULTILINE_COLUMNS,
};
pub use wrap::wrap;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
