//! The outline result type.

use super::Heading;
use serde::{Deserialize, Serialize};

/// The sole externally visible result per document.
///
/// Serializes to the fixed contract shape:
///
/// ```json
/// { "title": "...", "outline": [ { "level": "H1", "text": "...", "page": 1 } ] }
/// ```
///
/// Built once by the assembler, never mutated afterwards. Headings are in
/// document (page, position) order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outline {
    /// Document title (possibly empty)
    pub title: String,

    /// Ordered headings
    #[serde(rename = "outline")]
    pub headings: Vec<Heading>,
}

impl Outline {
    /// Create an outline from a title and headings.
    pub fn new(title: impl Into<String>, headings: Vec<Heading>) -> Self {
        Self {
            title: title.into(),
            headings,
        }
    }

    /// An outline with no title and no headings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the outline has no title and no headings.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.headings.is_empty()
    }

    /// Number of headings.
    pub fn len(&self) -> usize {
        self.headings.len()
    }
}
