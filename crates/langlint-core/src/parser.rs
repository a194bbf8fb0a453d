//! Frame-oriented lang file parsing
//!
//! A lang file is a repeating 4-line frame: a directive line carrying the
//! display geometry, a quoted source string, a quoted translation, and a
//! blank separator. The parser walks the file one frame at a time through an
//! explicit state machine and yields one [`Record`] per frame. The stream is
//! finite and not restartable; a fresh parse re-reads from the start.
//!
//! Termination is separator-driven: reaching end of file (or any non-blank
//! line) where the separator is expected ends the stream. That is the normal
//! end condition, not an error. Structural problems - an unknown directive
//! key, a non-integer geometry value, a malformed escape - abort the whole
//! run instead.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::escape;
use crate::types::{Geometry, Record, MULTILINE_COLUMNS};
use crate::wrap;

/// Reserved translation token meaning "intentionally blank"
const BLANK_SENTINEL: &str = "\\x00";

/// Lines per frame: directive, source, translation, separator
const FRAME_LINES: usize = 4;

/// Parser position within the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ReadingDirective,
    ReadingSource,
    ReadingTranslation,
    ReadingSeparator,
    /// Separator read yielded no data or a non-blank line
    Done,
    /// A structural error was yielded; nothing more will be produced
    Failed,
}

/// Streaming parser over the 4-line frames of a lang file.
///
/// Implements `Iterator<Item = Result<Record>>`. The line counter is owned
/// by the iteration state and advances by exactly four per completed frame.
pub struct Parser<R> {
    reader: R,
    state: State,
    /// 1-based line number of the current frame's directive line
    line: usize,
}

impl Parser<BufReader<File>> {
    /// Open a lang file for parsing
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening lang file");
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Parser<R> {
    /// Parse frames from any buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            state: State::ReadingDirective,
            line: 1,
        }
    }

    /// Read one line, stripping the trailing newline. `None` at end of file.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        let n = self.reader.read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    /// Parse the `key=value` tokens of a directive line.
    ///
    /// The first token is a label and is discarded. Only `c` and `r` are
    /// recognized; anything else is file corruption and fails the run.
    fn parse_directive(&self, raw: &str) -> Result<(Option<usize>, Option<usize>)> {
        let mut columns = None;
        let mut rows = None;

        let mut tokens = raw.split(' ');
        let _label = tokens.next();

        for token in tokens {
            let (key, value) = token.split_once('=').ok_or_else(|| Error::UnknownDirective {
                directive: raw.to_string(),
                line: self.line,
            })?;
            let parsed = value.parse::<usize>().map_err(|_| Error::DirectiveValue {
                key: key.to_string(),
                value: value.to_string(),
                line: self.line,
            })?;
            match key {
                "c" => columns = Some(parsed),
                "r" => rows = Some(parsed),
                _ => {
                    return Err(Error::UnknownDirective {
                        directive: raw.to_string(),
                        line: self.line,
                    });
                }
            }
        }

        Ok((columns, rows))
    }

    /// Strip one layer of surrounding double quotes
    fn strip_quotes(line: &str) -> &str {
        let s = line.strip_prefix('"').unwrap_or(line);
        s.strip_suffix('"').unwrap_or(s)
    }

    /// Decode a quoted string line, tagging decode failures with its line number
    fn decode_string(&self, raw: &str, offset: usize) -> Result<String> {
        escape::decode(Self::strip_quotes(raw)).map_err(|source| Error::Decode {
            line: self.line + offset,
            source,
        })
    }

    /// Drive the state machine through one frame
    fn next_record(&mut self) -> Result<Option<Record>> {
        self.state = State::ReadingDirective;
        let directive = match self.read_line()? {
            Some(line) => line,
            None => {
                self.state = State::Done;
                return Ok(None);
            }
        };
        let (columns, rows) = self.parse_directive(&directive)?;

        self.state = State::ReadingSource;
        let raw_source = match self.read_line()? {
            Some(line) => line,
            None => {
                self.state = State::Done;
                return Ok(None);
            }
        };
        let source = self.decode_string(&raw_source, 1)?;

        self.state = State::ReadingTranslation;
        let raw_translation = match self.read_line()? {
            Some(line) => line,
            None => {
                self.state = State::Done;
                return Ok(None);
            }
        };
        let stripped = Self::strip_quotes(&raw_translation);
        let translation = if stripped == BLANK_SENTINEL {
            String::new()
        } else {
            self.decode_string(&raw_translation, 2)?
        };

        // A directive with no display definition assumes the whole
        // translation fits one line; rows alone implies the conventional
        // multi-line column count.
        let geometry = match (columns, rows) {
            (None, None) => Geometry::fallback(translation.chars().count()),
            (c, r) => Geometry::new(c.unwrap_or(MULTILINE_COLUMNS), r.unwrap_or(1)),
        };

        let record = Record {
            line: self.line,
            geometry,
            wrapped_source: wrap::wrap(&source, geometry.columns),
            wrapped_translation: wrap::wrap(&translation, geometry.columns),
            source,
            translation,
        };

        self.state = State::ReadingSeparator;
        match self.read_line()? {
            Some(sep) if sep.is_empty() => {
                self.state = State::ReadingDirective;
            }
            // EOF or a non-blank line in separator position: the record is
            // complete, but the stream ends here.
            _ => self.state = State::Done,
        }

        debug!(line = record.line, cols = geometry.columns, rows = geometry.rows, "parsed frame");
        self.line += FRAME_LINES;
        Ok(Some(record))
    }
}

impl<R: BufRead> Iterator for Parser<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Done | State::Failed) {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(err) => {
                self.state = State::Failed;
                Some(Err(err))
            }
        }
    }
}
