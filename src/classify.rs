//! Pattern classification of normalized lines.
//!
//! A [`Classifier`] runs a fixed, priority-ordered list of rules over each
//! line and emits at most one [`HeadingCandidate`] per line. Rules are
//! independent pure predicates; the first match wins. Malformed input never
//! raises an error — a line matching no rule is simply not a candidate.

use crate::config::OutlineOptions;
use crate::model::{Confidence, HeadingCandidate, LevelHint, Line};
use regex::Regex;

/// One classifier rule: inspects a cleaned line and either produces the
/// heading text plus its level hint and confidence, or passes.
type Rule = fn(&Classifier, &str) -> Option<(String, LevelHint, Confidence)>;

/// Rules in priority order. Ties are broken by this order, highest first.
const RULES: &[Rule] = &[
    Classifier::match_chapter,
    Classifier::match_numbered,
    Classifier::match_keyword,
    Classifier::match_all_caps,
    Classifier::match_colon_terminated,
    Classifier::match_title_case,
];

/// Heading classifier with compiled patterns.
pub struct Classifier {
    options: OutlineOptions,
    chapter: Regex,
    numbered: Regex,
    skip_patterns: Vec<Regex>,
}

impl Classifier {
    /// Build a classifier for the given options.
    pub fn new(options: &OutlineOptions) -> Self {
        // "Chapter 7", "Chapter 7: Overview", "Part IV". Always a top-level
        // section marker.
        let chapter = Regex::new(r"(?i)^(?:chapter\s+\d+|part\s+[ivxlcdm]+)[.:]?(?:\s+.+)?$")
            .expect("chapter pattern is valid");

        // Dotted numeral prefix, tolerated trailing punctuation, and the
        // heading title. "1..2" cannot match: the group only accepts ".N"
        // continuations and the expression is anchored at both ends.
        let numbered =
            Regex::new(r"^(\d+(?:\.\d+)*)([.:)\]])?(?:\s+(.+))?$").expect("numbered pattern is valid");

        // Page furniture that must never become a candidate.
        let skip_sources = [
            r"^\d+$",                                                 // pure numbers
            r"(?i)^page\s+\d+",                                       // page numbers
            r"^©",                                                    // copyright
            r"(?i)^copyright\b",                                      // copyright
            r"(?i)^www\.",                                            // URLs
            r"(?i)^https?://",                                        // URLs
            r"(?i)^\d{1,2}\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)", // dates
            r"\.{3,}",                                                // TOC dot leaders
        ];
        let skip_patterns = skip_sources
            .iter()
            .map(|src| Regex::new(src).expect("skip pattern is valid"))
            .collect();

        Self {
            options: options.clone(),
            chapter,
            numbered,
            skip_patterns,
        }
    }

    /// Classify a single normalized line.
    ///
    /// Returns `None` for lines outside the plausible heading length range,
    /// lines matching a skip pattern, or lines matching no rule.
    pub fn classify(&self, line: &Line) -> Option<HeadingCandidate> {
        let text = line.text.as_str();
        let len = text.chars().count();
        if len < self.options.min_heading_chars || len > self.options.max_heading_chars {
            return None;
        }
        if self.skip_patterns.iter().any(|p| p.is_match(text)) {
            return None;
        }

        for rule in RULES {
            if let Some((heading_text, hint, confidence)) = rule(self, text) {
                return Some(HeadingCandidate {
                    text: heading_text,
                    page: line.page,
                    position: line.position,
                    hint,
                    confidence,
                });
            }
        }
        None
    }

    /// Classify a normalized line sequence, in document order.
    pub fn classify_lines(&self, lines: &[Line]) -> Vec<HeadingCandidate> {
        lines.iter().filter_map(|line| self.classify(line)).collect()
    }

    /// Family 1: chapter/part marker. A top-level structural claim; the
    /// whole line is the heading text.
    fn match_chapter(&self, text: &str) -> Option<(String, LevelHint, Confidence)> {
        if self.chapter.is_match(text) {
            let heading_text = text.trim_end_matches(':').trim_end().to_string();
            Some((heading_text, LevelHint::Numbered(1), Confidence::High))
        } else {
            None
        }
    }

    /// Family 2: dotted numeral prefix followed by the heading title. Depth
    /// maps from the segment count, capped at three.
    fn match_numbered(&self, text: &str) -> Option<(String, LevelHint, Confidence)> {
        let caps = self.numbered.captures(text)?;
        // A numeral standing alone ("3.14159", "2.0.1") is body text, not a
        // section heading.
        let heading_text = caps.get(3)?.as_str().to_string();
        let raw_segments = caps[1].split('.').count();
        // A single bare numeral ("2024 Annual Report") is not a section
        // number; one segment only counts with its dot ("1. Introduction").
        if raw_segments == 1 && caps.get(2).is_none() {
            return None;
        }
        let segments = raw_segments.min(3) as u8;
        Some((heading_text, LevelHint::Numbered(segments), Confidence::High))
    }

    /// Family 3: exact keyword-header match, case-insensitive.
    fn match_keyword(&self, text: &str) -> Option<(String, LevelHint, Confidence)> {
        if self.options.is_keyword_header(&text.to_lowercase()) {
            Some((text.to_string(), LevelHint::Keyword, Confidence::High))
        } else {
            None
        }
    }

    /// Family 4: every alphabetic character uppercase.
    fn match_all_caps(&self, text: &str) -> Option<(String, LevelHint, Confidence)> {
        let has_alpha = text.chars().any(|c| c.is_alphabetic());
        let all_upper = text
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| c.is_uppercase());
        if has_alpha && all_upper && text.chars().count() >= 2 && word_count(text) <= 8 {
            Some((text.to_string(), LevelHint::AllCaps, Confidence::Medium))
        } else {
            None
        }
    }

    /// Family 5: short phrase ending with a colon. The colon is stripped
    /// from the heading text.
    fn match_colon_terminated(&self, text: &str) -> Option<(String, LevelHint, Confidence)> {
        if text.ends_with(':') && word_count(text) < self.options.colon_phrase_word_limit {
            let stripped = text.trim_end_matches(':').trim_end().to_string();
            if stripped.is_empty() {
                return None;
            }
            Some((stripped, LevelHint::ColonTerminated, Confidence::Low))
        } else {
            None
        }
    }

    /// Family 6: most words capitalized, short, not a full sentence.
    fn match_title_case(&self, text: &str) -> Option<(String, LevelHint, Confidence)> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() < 2 || words.len() > 10 {
            return None;
        }
        // A sentence, not a heading: terminal period or one mid-line.
        if text.ends_with('.') || text.contains(". ") {
            return None;
        }
        let capitalized = words
            .iter()
            .filter(|w| w.chars().next().is_some_and(|c| c.is_uppercase()))
            .count();
        if capitalized * 2 > words.len() {
            Some((text.to_string(), LevelHint::TitleCase, Confidence::Low))
        } else {
            None
        }
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;

    fn classify(text: &str) -> Option<HeadingCandidate> {
        let options = OutlineOptions::default();
        let classifier = Classifier::new(&options);
        classifier.classify(&Line::new(text, 1, 0))
    }

    #[test]
    fn test_numbered_levels() {
        let c = classify("1. Introduction").unwrap();
        assert_eq!(c.hint, LevelHint::Numbered(1));
        assert_eq!(c.text, "Introduction");

        let c = classify("1.1 Background").unwrap();
        assert_eq!(c.hint, LevelHint::Numbered(2));
        assert_eq!(c.text, "Background");

        let c = classify("2.3.4 Deep Section").unwrap();
        assert_eq!(c.hint, LevelHint::Numbered(3));

        // Four segments cap at depth 3
        let c = classify("1.2.3.4 Very Deep").unwrap();
        assert_eq!(c.hint, LevelHint::Numbered(3));
    }

    #[test]
    fn test_numbered_trailing_punctuation() {
        let c = classify("2.1. Methods Overview").unwrap();
        assert_eq!(c.hint, LevelHint::Numbered(2));
        assert_eq!(c.text, "Methods Overview");

        let c = classify("1.2: Overview").unwrap();
        assert_eq!(c.hint, LevelHint::Numbered(2));
        assert_eq!(c.text, "Overview");
    }

    #[test]
    fn test_bare_numeral_is_not_a_heading() {
        // Decimals and version numbers standing alone are body text.
        assert!(classify("3.14159").is_none());
        assert!(classify("2.0.1").is_none());
        assert!(classify("1.").is_none());
    }

    #[test]
    fn test_chapter_and_part_headings() {
        let c = classify("Chapter 1: Overview").unwrap();
        assert_eq!(c.hint, LevelHint::Numbered(1));
        assert_eq!(c.text, "Chapter 1: Overview");

        let c = classify("Chapter 12").unwrap();
        assert_eq!(c.hint, LevelHint::Numbered(1));

        let c = classify("PART IV").unwrap();
        assert_eq!(c.hint, LevelHint::Numbered(1));
    }

    #[test]
    fn test_chapter_prefix_words_fall_through() {
        // No numeral after the marker word, so the chapter family passes.
        let c = classify("Chapters of Early History").unwrap();
        assert_eq!(c.hint, LevelHint::TitleCase);

        let c = classify("Particular Design Considerations").unwrap();
        assert_eq!(c.hint, LevelHint::TitleCase);
    }

    #[test]
    fn test_malformed_numbering_falls_through() {
        // "1..2" is not a valid dotted sequence; it also matches no other
        // family, so it is not a candidate at all.
        assert!(classify("1..2").is_none());
    }

    #[test]
    fn test_keyword_match() {
        let c = classify("References").unwrap();
        assert_eq!(c.hint, LevelHint::Keyword);
        assert_eq!(c.confidence, Confidence::High);

        let c = classify("TABLE OF CONTENTS").unwrap();
        assert_eq!(c.hint, LevelHint::Keyword);
    }

    #[test]
    fn test_keyword_beats_all_caps() {
        // "ABSTRACT" satisfies both families; keyword has priority.
        let c = classify("ABSTRACT").unwrap();
        assert_eq!(c.hint, LevelHint::Keyword);
    }

    #[test]
    fn test_all_caps() {
        let c = classify("EXECUTIVE SUMMARY").unwrap();
        assert_eq!(c.hint, LevelHint::AllCaps);
        assert_eq!(c.confidence, Confidence::Medium);
    }

    #[test]
    fn test_all_caps_rejects_long_runs() {
        assert!(classify("THIS IS A VERY LONG SHOUTED SENTENCE THAT KEEPS GOING ON").is_none());
    }

    #[test]
    fn test_colon_terminated() {
        let c = classify("Key findings:").unwrap();
        assert_eq!(c.hint, LevelHint::ColonTerminated);
        assert_eq!(c.text, "Key findings");
    }

    #[test]
    fn test_colon_terminated_too_wordy() {
        let long = "one two three four five six seven eight nine:";
        let options = OutlineOptions::default();
        let classifier = Classifier::new(&options);
        let result = classifier.classify(&Line::new(long, 1, 0));
        // Falls through the colon rule; lowercase words fail title-case too.
        assert!(result.is_none());
    }

    #[test]
    fn test_title_case() {
        let c = classify("Network Topology Design").unwrap();
        assert_eq!(c.hint, LevelHint::TitleCase);
    }

    #[test]
    fn test_sentence_is_not_title_case() {
        assert!(classify("The Quick Brown Fox Jumps Over.").is_none());
        assert!(classify("First Point. Second Point Follows Here").is_none());
    }

    #[test]
    fn test_skip_patterns() {
        assert!(classify("42").is_none());
        assert!(classify("Page 12").is_none());
        assert!(classify("© 2024 Acme Corp").is_none());
        assert!(classify("www.example.com").is_none());
        assert!(classify("https://example.com/doc").is_none());
        assert!(classify("12 Mar 2024").is_none());
        assert!(classify("Introduction ......... 3").is_none());
    }

    #[test]
    fn test_length_bounds() {
        assert!(classify("Hi").is_none());
        let long = "A ".repeat(150);
        assert!(classify(long.trim()).is_none());
    }

    #[test]
    fn test_classify_lines_order() {
        let options = OutlineOptions::default();
        let classifier = Classifier::new(&options);
        let lines = vec![
            Line::new("1. Introduction", 1, 0),
            Line::new("plain body text that matches nothing at all", 1, 1),
            Line::new("1.1 Background", 1, 2),
        ];
        let candidates = classifier.classify_lines(&lines);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].text, "Introduction");
        assert_eq!(candidates[1].text, "Background");
    }

    #[test]
    fn test_allcaps_level_is_configurable() {
        let options = OutlineOptions::new().with_allcaps_level(HeadingLevel::H1);
        let classifier = Classifier::new(&options);
        let c = classifier
            .classify(&Line::new("EXECUTIVE SUMMARY", 1, 0))
            .unwrap();
        // The hint carries the family; the level mapping happens in the
        // hierarchy builder using the configured all-caps level.
        assert_eq!(c.hint, LevelHint::AllCaps);
    }
}
