//! Title extraction.
//!
//! Scores early-page lines and picks the single best title candidate,
//! independently of heading classification. If no line qualifies, the
//! title is the empty string.

use crate::config::OutlineOptions;
use crate::model::Line;

/// Plausible title length range, in characters.
const MIN_TITLE_CHARS: usize = 15;
const MAX_TITLE_CHARS: usize = 150;

/// A title must be longer than a word or two.
const MIN_TITLE_WORDS: usize = 3;

/// Metadata markers that disqualify a line from being the title.
const METADATA_MARKERS: &[&str] = &[
    "copyright", "version", "page", "©", "date", "www", "http",
];

/// A scored early-page line considered for the title slot. Transient:
/// discarded once the best one is chosen.
#[derive(Debug, Clone)]
struct TitleCandidate {
    text: String,
    score: i32,
}

/// Pick the document title from the first pages of normalized lines.
///
/// Returns the empty string when no line qualifies.
pub fn extract_title(lines: &[Line], options: &OutlineOptions) -> String {
    let mut best: Option<TitleCandidate> = None;

    let scanned = lines
        .iter()
        .filter(|line| line.page <= options.title_scan_page_limit)
        .take(options.title_scan_line_limit);

    for (index, line) in scanned.enumerate() {
        let Some(mut candidate) = score_line(&line.text) else {
            continue;
        };
        // Earlier lines score higher.
        candidate.score += (options.title_scan_line_limit.saturating_sub(index)) as i32;

        // Strictly-greater keeps the earliest line on ties.
        if best.as_ref().map_or(true, |b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    best.map(|c| c.text).unwrap_or_default()
}

/// Score a single line, or disqualify it.
fn score_line(text: &str) -> Option<TitleCandidate> {
    let chars = text.chars().count();
    let words: Vec<&str> = text.split_whitespace().collect();

    if !(MIN_TITLE_CHARS..=MAX_TITLE_CHARS).contains(&chars) || words.len() < MIN_TITLE_WORDS {
        return None;
    }
    // Colon-terminated lines read as section headers, not titles.
    if text.ends_with(':') {
        return None;
    }
    if text.chars().all(|c| c.is_ascii_digit() || c.is_whitespace()) {
        return None;
    }
    // Numbered section headings are not titles.
    if starts_with_numbering(text) {
        return None;
    }
    let lower = text.to_lowercase();
    if lower.starts_with("table of") || METADATA_MARKERS.iter().any(|m| lower.contains(m)) {
        return None;
    }

    let mut score = 0;
    if (20..=100).contains(&chars) {
        score += 15;
    }
    let capitalized = words
        .iter()
        .filter(|w| w.chars().next().is_some_and(|c| c.is_uppercase()))
        .count();
    if capitalized * 2 > words.len() {
        score += 20;
    }
    // A long line ending in a period reads as body text.
    if text.ends_with('.') && words.len() > 8 {
        score -= 20;
    }

    Some(TitleCandidate {
        text: text.to_string(),
        score,
    })
}

/// Check for a leading dotted-numeral section prefix ("1.", "2.3 ...").
fn starts_with_numbering(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    let mut saw_digit = false;
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            saw_digit = true;
            chars.next();
        } else {
            break;
        }
    }
    saw_digit && chars.peek() == Some(&'.')
}
