//! Backslash-escape decoding for raw lang-file strings
//!
//! Lang files store control characters as literal two-character escape
//! sequences (`\n`, `\xb0`, ...). Decoding happens once per string line,
//! after quote stripping. A string without any backslash is passed through
//! untouched, which keeps plain strings byte-for-byte identical.

use thiserror::Error;

/// A malformed escape sequence in a string line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed escape '{sequence}' at character {offset}")]
pub struct DecodeError {
    /// The offending escape sequence as written in the file
    pub sequence: String,
    /// 0-based char offset of the backslash within the raw string
    pub offset: usize,
}

/// Decode backslash-escape sequences into their real characters.
///
/// Supports the single-character escapes `\n \t \r \0 \\ \' \" \a \b \f \v`,
/// two-digit hex escapes `\xHH` and four-digit Unicode escapes `\uXXXX`.
pub fn decode(raw: &str) -> Result<String, DecodeError> {
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    let mut offset = 0usize;

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            offset += 1;
            continue;
        }

        let escape_offset = offset;
        let next = chars.next().ok_or_else(|| DecodeError {
            sequence: "\\".to_string(),
            offset: escape_offset,
        })?;

        match next {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '0' => out.push('\0'),
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'v' => out.push('\x0b'),
            'x' => {
                let code = take_hex(&mut chars, 2, escape_offset, "\\x")?;
                out.push(scalar(code, escape_offset, "\\x")?);
                offset += 2;
            }
            'u' => {
                let code = take_hex(&mut chars, 4, escape_offset, "\\u")?;
                out.push(scalar(code, escape_offset, "\\u")?);
                offset += 4;
            }
            other => {
                return Err(DecodeError {
                    sequence: format!("\\{}", other),
                    offset: escape_offset,
                });
            }
        }
        offset += 2;
    }

    Ok(out)
}

/// Consume exactly `count` hex digits and return their value
fn take_hex(
    chars: &mut std::str::Chars<'_>,
    count: usize,
    offset: usize,
    prefix: &str,
) -> Result<u32, DecodeError> {
    let mut digits = String::with_capacity(count);
    for _ in 0..count {
        match chars.next() {
            Some(d) if d.is_ascii_hexdigit() => digits.push(d),
            Some(d) => {
                return Err(DecodeError {
                    sequence: format!("{}{}{}", prefix, digits, d),
                    offset,
                });
            }
            None => {
                return Err(DecodeError {
                    sequence: format!("{}{}", prefix, digits),
                    offset,
                });
            }
        }
    }
    // digits are validated hex, parsing cannot fail
    Ok(u32::from_str_radix(&digits, 16).unwrap_or(0))
}

/// Reject codes outside the Unicode scalar range (e.g. lone surrogates)
fn scalar(code: u32, offset: usize, prefix: &str) -> Result<char, DecodeError> {
    char::from_u32(code).ok_or_else(|| DecodeError {
        sequence: format!("{}{:x}", prefix, code),
        offset,
    })
}
