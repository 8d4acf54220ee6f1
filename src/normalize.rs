//! Line normalization.
//!
//! Pure transform over extracted lines: Unicode NFC normalization,
//! whitespace collapse, and empty-line removal. Page and position
//! association is preserved so downstream stages keep document order.

use crate::model::Line;
use unicode_normalization::UnicodeNormalization;

/// Clean a single line of text: NFC-normalize, trim, and collapse internal
/// whitespace runs to a single space.
pub fn clean_text(text: &str) -> String {
    let normalized: String = text.nfc().collect();
    let mut out = String::with_capacity(normalized.len());
    let mut in_space = false;
    for ch in normalized.trim().chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Normalize a sequence of lines, dropping those that are empty after
/// cleaning. Never fails; an empty input produces an empty output.
pub fn normalize_lines(lines: &[Line]) -> Vec<Line> {
    lines
        .iter()
        .filter_map(|line| {
            let text = clean_text(&line.text);
            if text.is_empty() {
                None
            } else {
                Some(Line::new(text, line.page, line.position))
            }
        })
        .collect()
}
