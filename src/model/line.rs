//! A single line of extracted page text.

use serde::{Deserialize, Serialize};

/// One line of text with its page association.
///
/// Produced by the text-extraction collaborator (or constructed directly
/// for testing); immutable once created. Pages are 1-indexed and
/// `position` is the line's index within its page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Line text content
    pub text: String,

    /// Page number (1-indexed)
    pub page: u32,

    /// Position within the page (0-indexed)
    pub position: u32,
}

impl Line {
    /// Create a new line.
    pub fn new(text: impl Into<String>, page: u32, position: u32) -> Self {
        Self {
            text: text.into(),
            page,
            position,
        }
    }
}
