//! Heading types: levels, classification hints, candidates, and the final
//! leveled heading.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading depth in the outline.
///
/// Serialized exactly as `"H1"`, `"H2"`, `"H3"` — the three-level
/// enumeration is contract surface for external consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric depth: H1 = 1, H2 = 2, H3 = 3.
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// Level for a numeric depth, capped at H3. Depth 0 maps to H1.
    pub fn from_depth(depth: u8) -> Self {
        match depth {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadingLevel::H1 => write!(f, "H1"),
            HeadingLevel::H2 => write!(f, "H2"),
            HeadingLevel::H3 => write!(f, "H3"),
        }
    }
}

/// Which classifier family matched a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelHint {
    /// Dotted numeral prefix; the payload is the segment count (1..=3).
    Numbered(u8),
    /// Exact match against the keyword header set ("Introduction", ...).
    Keyword,
    /// Every alphabetic character uppercase.
    AllCaps,
    /// Majority of words capitalized, short, not a sentence.
    TitleCase,
    /// Short phrase ending with ':'.
    ColonTerminated,
}

/// Ordinal confidence of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// A line tentatively identified as heading-like, before hierarchy
/// resolution. Never mutated after creation; the final level is assigned
/// on the [`Heading`] the hierarchy builder produces from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingCandidate {
    /// Cleaned heading text
    pub text: String,

    /// Page number (1-indexed)
    pub page: u32,

    /// Position within the page
    pub position: u32,

    /// Which rule family matched
    pub hint: LevelHint,

    /// Classification confidence
    pub confidence: Confidence,
}

/// A finalized, leveled heading with its page number.
///
/// Field order is the wire contract: `level`, `text`, `page`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (H1, H2, H3)
    pub level: HeadingLevel,

    /// Heading text
    pub text: String,

    /// Page number (1-indexed)
    pub page: u32,
}

impl Heading {
    /// Create a new heading.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}
