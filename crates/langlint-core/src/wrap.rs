//! Greedy word-boundary text wrapping
//!
//! Reconstructs how the firmware renders a string on a fixed-width character
//! display: as many whole words per row as fit, breaking only at whitespace.
//! Widths are measured in chars, matching the one-cell-per-character
//! semantics of the target displays.

/// Wrap `text` to `width` columns.
///
/// Words are atomic and never split; a single word longer than `width` gets
/// its own over-wide fragment. Produced fragments carry no leading or
/// trailing whitespace. Empty or all-whitespace input yields an empty Vec.
/// Stateless: identical input always produces identical output.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
