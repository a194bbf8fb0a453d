//! Core data types for lang-file records and diagnostics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column count a multi-row display is expected to declare.
pub const MULTILINE_COLUMNS: usize = 20;

/// Display geometry a string must fit into.
///
/// `declared` is false when the directive line carried neither a `c` nor an
/// `r` key and the columns were defaulted to the translation length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub columns: usize,
    pub rows: usize,
    pub declared: bool,
}

impl Geometry {
    /// Geometry for an explicitly declared display area
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            declared: true,
        }
    }

    /// Fallback geometry for a directive with no display definition:
    /// one row wide enough to hold the whole translation
    pub fn fallback(columns: usize) -> Self {
        Self {
            columns,
            rows: 1,
            declared: false,
        }
    }
}

/// One parsed 4-line frame of a lang file.
///
/// Transient: constructed by the parser, consumed by the checker, discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based line number of the frame's directive line
    pub line: usize,
    pub geometry: Geometry,
    /// Decoded source-language string
    pub source: String,
    /// Decoded translation; empty means intentionally blank
    pub translation: String,
    pub wrapped_source: Vec<String>,
    pub wrapped_translation: Vec<String>,
}

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Should be reviewed; never affects the exit code
    Warning,
    /// A real defect in the translation; still does not stop the run
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Which heuristic check produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    MissingGeometry,
    OddColumns,
    Overflow,
    SourceOverflow,
    PlaceholderCount,
    PunctuationStart,
    PunctuationEnd,
    ShortTranslation,
}

/// Payload for rendering the text a diagnostic is about.
///
/// `translation` is absent for source-only displays (the source-overflow
/// warning shows just the reference string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDisplay {
    pub geometry: Geometry,
    pub source: String,
    pub wrapped_source: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapped_translation: Option<Vec<String>>,
}

impl TextDisplay {
    /// Side-by-side source and translation blocks
    pub fn side_by_side(record: &Record) -> Self {
        Self {
            geometry: record.geometry,
            source: record.source.clone(),
            wrapped_source: record.wrapped_source.clone(),
            translation: Some(record.translation.clone()),
            wrapped_translation: Some(record.wrapped_translation.clone()),
        }
    }

    /// Source block only
    pub fn source_only(record: &Record) -> Self {
        Self {
            geometry: record.geometry,
            source: record.source.clone(),
            wrapped_source: record.wrapped_source.clone(),
            translation: None,
            wrapped_translation: None,
        }
    }
}

/// A single finding, produced as a value and rendered by the consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub check: CheckKind,
    pub message: String,
    /// 1-based directive-line number of the record the finding is about
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<TextDisplay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            line: 1,
            geometry: Geometry::new(20, 2),
            source: "Hello world".to_string(),
            translation: "Bonjour monde".to_string(),
            wrapped_source: vec!["Hello world".to_string()],
            wrapped_translation: vec!["Bonjour monde".to_string()],
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn test_fallback_geometry() {
        let geom = Geometry::fallback(13);
        assert_eq!(geom.columns, 13);
        assert_eq!(geom.rows, 1);
        assert!(!geom.declared);
    }

    #[test]
    fn test_source_only_display_has_no_translation() {
        let display = TextDisplay::source_only(&sample_record());
        assert!(display.translation.is_none());
        assert!(display.wrapped_translation.is_none());
    }

    #[test]
    fn test_diagnostic_serializes_without_empty_fields() {
        let diag = Diagnostic {
            severity: Severity::Warning,
            check: CheckKind::ShortTranslation,
            message: "Short translation on line 1".to_string(),
            line: 1,
            display: None,
        };
        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains("\"severity\":\"warning\""));
        assert!(json.contains("\"check\":\"short_translation\""));
        assert!(!json.contains("display"));
    }
}
