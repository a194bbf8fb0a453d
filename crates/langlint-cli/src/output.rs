//! Diagnostic rendering for the langlint CLI
//!
//! The [`Reporter`] is handed its color capability, warning suppression and
//! output format once at construction and renders diagnostics as they
//! stream out of the checker. Two display modes mirror the physical
//! hardware: single-row geometries print the raw string truncated to the
//! column count, multi-row geometries print each wrapped line with a row
//! index. Overflowing portions and out-of-range row indexes are marked red.

use std::io::{self, Write};

use colored::Colorize;
use langlint_core::{Diagnostic, Geometry, Severity, TextDisplay};

use crate::error::Result;

/// Renders banners and diagnostics to an injected sink
pub struct Reporter {
    use_color: bool,
    no_warning: bool,
    json: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl Reporter {
    /// Create a reporter writing to stdout
    pub fn new(use_color: bool, no_warning: bool, json: bool, quiet: bool) -> Self {
        Self {
            use_color,
            no_warning,
            json,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create a reporter with a custom writer
    pub fn with_writer(
        use_color: bool,
        no_warning: bool,
        json: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            use_color,
            no_warning,
            json,
            quiet,
            writer,
        }
    }

    fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Print a run banner (start/end); green, skipped in JSON and quiet modes
    pub fn banner(&mut self, text: &str) -> Result<()> {
        if self.json || self.quiet {
            return Ok(());
        }
        if self.use_color {
            let text = text.green().to_string();
            self.writeln(&text)
        } else {
            self.writeln(text)
        }
    }

    /// Render one diagnostic, honoring warning suppression
    pub fn diagnostic(&mut self, diag: &Diagnostic) -> Result<()> {
        if self.no_warning && diag.severity == Severity::Warning {
            return Ok(());
        }

        if self.json {
            let line = serde_json::to_string(diag)?;
            return self.writeln(&line);
        }

        let tagged = match diag.severity {
            Severity::Warning => format!("[W]: {}", diag.message),
            Severity::Error => format!("[E]: {}", diag.message),
        };
        let tagged = if self.use_color {
            match diag.severity {
                Severity::Warning => tagged.yellow().to_string(),
                Severity::Error => tagged.red().to_string(),
            }
        } else {
            tagged
        };
        self.writeln(&tagged)?;

        if let Some(display) = &diag.display {
            self.render_display(display)?;
        }
        Ok(())
    }

    /// Source block, or source and translation blocks side by side
    fn render_display(&mut self, display: &TextDisplay) -> Result<()> {
        match (&display.translation, &display.wrapped_translation) {
            (Some(translation), Some(wrapped_translation)) => {
                self.writeln(" source text:")?;
                self.render_text(&display.source, &display.wrapped_source, display.geometry)?;
                self.writeln(" translated text:")?;
                self.render_text(translation, wrapped_translation, display.geometry)?;
            }
            _ => {
                self.render_text(&display.source, &display.wrapped_source, display.geometry)?;
            }
        }
        self.writeln("")
    }

    fn render_text(&mut self, raw: &str, wrapped: &[String], geometry: Geometry) -> Result<()> {
        if geometry.rows == 1 {
            self.render_truncated(raw, geometry.columns)
        } else {
            self.render_wrapped(wrapped, geometry)
        }
    }

    /// `   |<text padded to cols>|<excess>` with the excess marked red
    fn render_truncated(&mut self, text: &str, columns: usize) -> Result<()> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() <= columns {
            let padding = " ".repeat(columns - chars.len());
            self.writeln(&format!("   |{}{}|", text, padding))
        } else {
            let prefix: String = chars[..columns].iter().collect();
            let suffix: String = chars[columns..].iter().collect();
            let suffix = if self.use_color {
                suffix.red().to_string()
            } else {
                suffix
            };
            self.writeln(&format!("   |{}|{}", prefix, suffix))
        }
    }

    /// ` <n> |<line padded to cols>|` with indexes past the row count marked red
    fn render_wrapped(&mut self, wrapped: &[String], geometry: Geometry) -> Result<()> {
        for (row, line) in wrapped.iter().enumerate() {
            let index = format!("{:>3}", row + 1);
            let index = if row >= geometry.rows && self.use_color {
                index.red().to_string()
            } else {
                index
            };
            let padding = " ".repeat(geometry.columns.saturating_sub(line.chars().count()));
            self.writeln(&format!(" {} |{}{}|", index, line, padding))?;
        }
        Ok(())
    }
}
