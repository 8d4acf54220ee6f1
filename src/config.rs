//! Outline extraction options.

use crate::model::HeadingLevel;

/// Common section names that always read as top-level headings,
/// case-insensitively.
pub const DEFAULT_KEYWORD_HEADERS: &[&str] = &[
    "introduction",
    "overview",
    "background",
    "summary",
    "conclusion",
    "references",
    "bibliography",
    "acknowledgements",
    "acknowledgments",
    "appendix",
    "index",
    "glossary",
    "abstract",
    "revision history",
    "table of contents",
];

/// Options controlling heading classification and title extraction.
///
/// Constructed once and passed into the pipeline; the core reads no
/// ambient state.
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Maximum plausible heading length in characters
    pub max_heading_chars: usize,

    /// Minimum heading length in characters
    pub min_heading_chars: usize,

    /// How many pages to scan for the title
    pub title_scan_page_limit: u32,

    /// How many lines of the first page to consider for the title
    pub title_scan_line_limit: usize,

    /// Word-count threshold below which a colon-terminated line is a heading
    pub colon_phrase_word_limit: usize,

    /// Level assigned to all-caps headings
    pub allcaps_level: HeadingLevel,

    /// Section names (lowercase) that always classify as top-level headings
    pub keyword_headers: Vec<String>,

    /// Drop the first heading when its text duplicates the title verbatim
    pub strict_title_dedup: bool,
}

impl OutlineOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum heading length.
    pub fn with_max_heading_chars(mut self, chars: usize) -> Self {
        self.max_heading_chars = chars;
        self
    }

    /// Set the number of pages scanned for the title.
    pub fn with_title_scan_pages(mut self, pages: u32) -> Self {
        self.title_scan_page_limit = pages;
        self
    }

    /// Set the colon-heading word-count threshold.
    pub fn with_colon_phrase_word_limit(mut self, words: usize) -> Self {
        self.colon_phrase_word_limit = words;
        self
    }

    /// Set the level assigned to all-caps headings.
    pub fn with_allcaps_level(mut self, level: HeadingLevel) -> Self {
        self.allcaps_level = level;
        self
    }

    /// Replace the keyword header set. Entries are lowercased.
    pub fn with_keyword_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keyword_headers = headers
            .into_iter()
            .map(|s| s.into().to_lowercase())
            .collect();
        self
    }

    /// Enable strict title deduplication.
    pub fn strict_title(mut self) -> Self {
        self.strict_title_dedup = true;
        self
    }

    /// Check whether a lowercased line is a keyword header.
    pub fn is_keyword_header(&self, line_lower: &str) -> bool {
        self.keyword_headers.iter().any(|k| k == line_lower)
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            max_heading_chars: 200,
            min_heading_chars: 3,
            title_scan_page_limit: 2,
            title_scan_line_limit: 15,
            colon_phrase_word_limit: 8,
            allcaps_level: HeadingLevel::H2,
            keyword_headers: DEFAULT_KEYWORD_HEADERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            strict_title_dedup: false,
        }
    }
}
