//! Heuristic checks applied to every parsed record
//!
//! Checks are pure: they take a [`Record`] and return [`Diagnostic`] values
//! in a fixed order, leaving rendering to the consumer. All checks are
//! independent; several may fire on the same record. Warning suppression is
//! a presentation concern and happens at render time.

use tracing::debug;

use crate::types::{
    CheckKind, Diagnostic, Record, Severity, TextDisplay, MULTILINE_COLUMNS,
};

/// Run the full check order against one record
pub fn run_checks(record: &Record) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    diagnostics.extend(check_geometry(record));
    diagnostics.extend(check_overflow(record));
    diagnostics.extend(check_source_overflow(record));
    diagnostics.extend(check_placeholders(record));
    diagnostics.extend(check_punctuation(record));
    diagnostics.extend(check_short_translation(record));

    if !diagnostics.is_empty() {
        debug!(line = record.line, count = diagnostics.len(), "record flagged");
    }
    diagnostics
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn percent_count(s: &str) -> usize {
    s.chars().filter(|&c| c == '%').count()
}

/// Geometry sanity: a frame with no display definition, or a multi-row
/// display that does not use the conventional column count
fn check_geometry(record: &Record) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let geom = record.geometry;

    if !geom.declared {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            check: CheckKind::MissingGeometry,
            message: format!("No display definition on line {}", record.line),
            line: record.line,
            display: None,
        });
    }

    if geom.rows > 1 && geom.columns != MULTILINE_COLUMNS {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            check: CheckKind::OddColumns,
            message: format!(
                "Multiple rows with odd number of columns on line {}",
                record.line
            ),
            line: record.line,
            display: None,
        });
    }

    diagnostics
}

/// Translation does not fit the declared display area
fn check_overflow(record: &Record) -> Vec<Diagnostic> {
    let geom = record.geometry;
    let overflows = if geom.rows == 1 {
        char_len(&record.translation) > geom.columns
    } else {
        record.wrapped_translation.len() > geom.rows
    };
    if !overflows {
        return Vec::new();
    }

    let row_deficit = record.wrapped_translation.len() as isize - geom.rows as isize;
    vec![Diagnostic {
        severity: Severity::Error,
        check: CheckKind::Overflow,
        message: format!(
            "Text is longer than definition on line {}: cols={} rows={} (rows diff={})",
            record.line, geom.columns, geom.rows, row_deficit
        ),
        line: record.line,
        display: Some(TextDisplay::side_by_side(record)),
    }]
}

/// The same overflow test applied to the source string; flags
/// inconsistencies in the reference file itself
fn check_source_overflow(record: &Record) -> Vec<Diagnostic> {
    let geom = record.geometry;
    if geom.rows == 1 {
        if char_len(&record.source) > geom.columns {
            return vec![Diagnostic {
                severity: Severity::Warning,
                check: CheckKind::SourceOverflow,
                message: format!(
                    "Source text longer than {} cols as defined on line {}:",
                    geom.columns, record.line
                ),
                line: record.line,
                display: Some(TextDisplay::source_only(record)),
            }];
        }
    } else if record.wrapped_source.len() > geom.rows {
        return vec![Diagnostic {
            severity: Severity::Warning,
            check: CheckKind::SourceOverflow,
            message: format!(
                "Wrapped source text longer than {} rows as defined on line {}:",
                geom.rows, record.line
            ),
            line: record.line,
            display: Some(TextDisplay::source_only(record)),
        }];
    }
    Vec::new()
}

/// `%` marks a runtime-substituted value; a count mismatch renders garbage
/// or crashes the firmware's format routine. Intentionally blank
/// translations are exempt.
fn check_placeholders(record: &Record) -> Vec<Diagnostic> {
    if record.translation.is_empty() {
        return Vec::new();
    }
    if percent_count(&record.source) == percent_count(&record.translation) {
        return Vec::new();
    }
    vec![Diagnostic {
        severity: Severity::Error,
        check: CheckKind::PlaceholderCount,
        message: format!("Unequal count of % escapes on line {}:", record.line),
        line: record.line,
        display: Some(TextDisplay::side_by_side(record)),
    }]
}

fn ignorable_first(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '%' | '?')
}

fn ignorable_last(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '.' | '\'')
}

/// First and last-non-whitespace characters of source and translation should
/// agree unless both fall in the ignorable class for that position
fn check_punctuation(record: &Record) -> Vec<Diagnostic> {
    if record.source.is_empty() || record.translation.is_empty() {
        return Vec::new();
    }
    let mut diagnostics = Vec::new();

    let source_first = record.source.chars().next();
    let translation_first = record.translation.chars().next();
    if let (Some(s), Some(t)) = (source_first, translation_first) {
        if !(ignorable_first(s) && ignorable_first(t)) && s != t {
            diagnostics.push(Diagnostic {
                severity: Severity::Warning,
                check: CheckKind::PunctuationStart,
                message: format!(
                    "Differing first punctuation character ({} => {}) on line {}:",
                    s, t, record.line
                ),
                line: record.line,
                display: None,
            });
        }
    }

    let source_last = record.source.trim_end().chars().last();
    let translation_last = record.translation.trim_end().chars().last();
    if let (Some(s), Some(t)) = (source_last, translation_last) {
        if !(ignorable_last(s) && ignorable_last(t)) && s != t {
            diagnostics.push(Diagnostic {
                severity: Severity::Warning,
                check: CheckKind::PunctuationEnd,
                message: format!(
                    "Differing last punctuation character ({} => {}) on line {}:",
                    s, t, record.line
                ),
                line: record.line,
                display: None,
            });
        }
    }

    // one display block per record, after all drift messages
    if let Some(last) = diagnostics.last_mut() {
        last.display = Some(TextDisplay::side_by_side(record));
    }
    diagnostics
}

/// A translation under half the source length is likely truncated or
/// unfinished work
fn check_short_translation(record: &Record) -> Vec<Diagnostic> {
    if record.source.is_empty() || record.translation.is_empty() {
        return Vec::new();
    }
    let source_len = char_len(record.source.trim());
    let translation_len = char_len(record.translation.trim());
    if translation_len * 2 >= source_len {
        return Vec::new();
    }
    vec![Diagnostic {
        severity: Severity::Warning,
        check: CheckKind::ShortTranslation,
        message: format!("Short translation on line {}:", record.line),
        line: record.line,
        display: Some(TextDisplay::side_by_side(record)),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Geometry;
    use crate::wrap::wrap;

    fn record(columns: usize, rows: usize, source: &str, translation: &str) -> Record {
        Record {
            line: 1,
            geometry: Geometry::new(columns, rows),
            source: source.to_string(),
            translation: translation.to_string(),
            wrapped_source: wrap(source, columns),
            wrapped_translation: wrap(translation, columns),
        }
    }

    fn kinds(diagnostics: &[Diagnostic]) -> Vec<CheckKind> {
        diagnostics.iter().map(|d| d.check).collect()
    }

    #[test]
    fn test_clean_record_has_no_diagnostics() {
        let rec = record(20, 1, "OK", "OK");
        assert!(run_checks(&rec).is_empty());
    }

    #[test]
    fn test_overflow_single_row_boundary() {
        // length 11 into 10 columns fires; length 10 does not
        let over = record(10, 1, "Label", "abcdefghijk");
        assert!(kinds(&run_checks(&over)).contains(&CheckKind::Overflow));

        let fits = record(10, 1, "Label", "abcdefghij");
        assert!(!kinds(&run_checks(&fits)).contains(&CheckKind::Overflow));
    }

    #[test]
    fn test_overflow_multi_row_counts_wrapped_lines() {
        // wraps to two full rows: fits a 2-row display exactly
        let fits = record(10, 2, "ok", "aaaa bbbb cccc dddd");
        assert!(!kinds(&run_checks(&fits)).contains(&CheckKind::Overflow));

        // a fifth word forces a third row
        let rec = record(10, 2, "ok", "aaaa bbbb cccc dddd eeee");
        let diags = run_checks(&rec);
        let overflow = diags
            .iter()
            .find(|d| d.check == CheckKind::Overflow)
            .expect("overflow should fire");
        assert_eq!(overflow.severity, Severity::Error);
        assert!(overflow.message.contains("cols=10 rows=2"));
        assert!(overflow.message.contains("rows diff=1"));
    }

    #[test]
    fn test_overflow_attaches_side_by_side_display() {
        let rec = record(5, 1, "src", "toolongtext");
        let diags = run_checks(&rec);
        let overflow = diags.iter().find(|d| d.check == CheckKind::Overflow).unwrap();
        let display = overflow.display.as_ref().unwrap();
        assert!(display.translation.is_some());
    }

    #[test]
    fn test_source_overflow_is_warning_with_source_only_display() {
        let rec = record(5, 1, "a very long source", "short");
        let diags = run_checks(&rec);
        let finding = diags
            .iter()
            .find(|d| d.check == CheckKind::SourceOverflow)
            .expect("source overflow should fire");
        assert_eq!(finding.severity, Severity::Warning);
        assert!(finding.display.as_ref().unwrap().translation.is_none());
    }

    #[test]
    fn test_placeholder_mismatch() {
        let rec = record(20, 1, "%s of %s", "%s of all");
        let diags = run_checks(&rec);
        assert!(kinds(&diags).contains(&CheckKind::PlaceholderCount));

        let equal = record(20, 1, "%s of %s", "%s von %s");
        assert!(!kinds(&run_checks(&equal)).contains(&CheckKind::PlaceholderCount));
    }

    #[test]
    fn test_placeholder_skipped_for_blank_translation() {
        let rec = record(20, 1, "%s done", "");
        assert!(!kinds(&run_checks(&rec)).contains(&CheckKind::PlaceholderCount));
    }

    #[test]
    fn test_punctuation_drift_at_end() {
        let rec = record(20, 1, "Ready!", "Bereit");
        let diags = run_checks(&rec);
        let drift = diags
            .iter()
            .find(|d| d.check == CheckKind::PunctuationEnd)
            .expect("end drift should fire");
        assert!(drift.message.contains("! => t"));
        assert!(drift.display.is_some());
    }

    #[test]
    fn test_punctuation_ignorable_class_suppresses_drift() {
        // '.' and '\'' are both ignorable at the end position
        let rec = record(20, 1, "Done.", "Fertig'");
        assert!(!kinds(&run_checks(&rec)).contains(&CheckKind::PunctuationEnd));
        // '%' and '?' are ignorable at the start position
        let rec = record(20, 1, "%d files", "?d Dateien");
        assert!(!kinds(&run_checks(&rec)).contains(&CheckKind::PunctuationStart));
    }

    #[test]
    fn test_punctuation_drift_at_both_ends_shares_one_display() {
        let rec = record(20, 1, ">Print<", "Drucken");
        let diags = run_checks(&rec);
        let drifts: Vec<_> = diags
            .iter()
            .filter(|d| {
                matches!(
                    d.check,
                    CheckKind::PunctuationStart | CheckKind::PunctuationEnd
                )
            })
            .collect();
        assert_eq!(drifts.len(), 2);
        assert!(drifts[0].display.is_none());
        assert!(drifts[1].display.is_some());
    }

    #[test]
    fn test_punctuation_compares_last_non_whitespace() {
        let rec = record(20, 1, "Stop!  ", "Halt!  ");
        assert!(!kinds(&run_checks(&rec)).contains(&CheckKind::PunctuationEnd));
    }

    #[test]
    fn test_punctuation_skipped_when_either_empty() {
        let rec = record(20, 1, "Hello!", "");
        assert!(run_checks(&rec)
            .iter()
            .all(|d| !matches!(d.check, CheckKind::PunctuationStart | CheckKind::PunctuationEnd)));
    }

    #[test]
    fn test_short_translation_boundary() {
        // "Bonjour" (7) is at least half of "Hello!" (6): no warning
        let ok = record(20, 1, "Hello!", "Bonjour");
        assert!(!kinds(&run_checks(&ok)).contains(&CheckKind::ShortTranslation));

        // "Hi" (2) is under half of "Hello!" (6): warning
        let short = record(20, 1, "Hello!", "Hi");
        assert!(kinds(&run_checks(&short)).contains(&CheckKind::ShortTranslation));
    }

    #[test]
    fn test_short_translation_skipped_for_blank() {
        let rec = record(20, 1, "A long source string", "");
        assert!(!kinds(&run_checks(&rec)).contains(&CheckKind::ShortTranslation));
    }

    #[test]
    fn test_missing_geometry_warning() {
        let mut rec = record(10, 1, "abc", "abcdef");
        rec.geometry = Geometry::fallback(6);
        let diags = run_checks(&rec);
        assert!(kinds(&diags).contains(&CheckKind::MissingGeometry));
        assert!(diags[0].message.contains("No display definition on line 1"));
    }

    #[test]
    fn test_odd_columns_warning() {
        let rec = record(16, 2, "abc", "def");
        assert!(kinds(&run_checks(&rec)).contains(&CheckKind::OddColumns));

        let conventional = record(20, 2, "abc", "def");
        assert!(!kinds(&run_checks(&conventional)).contains(&CheckKind::OddColumns));
    }

    #[test]
    fn test_check_order_is_stable() {
        // a record firing overflow, placeholder and short checks at once
        let rec = record(4, 1, "Printing %s now!", "%%%%%");
        let diags = run_checks(&rec);
        let order = kinds(&diags);
        let overflow = order.iter().position(|k| *k == CheckKind::Overflow).unwrap();
        let placeholder = order
            .iter()
            .position(|k| *k == CheckKind::PlaceholderCount)
            .unwrap();
        let short = order
            .iter()
            .position(|k| *k == CheckKind::ShortTranslation)
            .unwrap();
        assert!(overflow < placeholder);
        assert!(placeholder < short);
    }
}
