//! Text extraction collaborator.
//!
//! Turns a PDF document into the per-page [`Line`] sequence the outline
//! core consumes. This is the only stage that can fail on a corrupt
//! document; in lenient mode it degrades to an empty line sequence so
//! batch runs never abort on one bad file.

use crate::error::{Error, Result};
use crate::model::Line;
use std::fs;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Error handling mode during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    #[default]
    Strict,
    /// Degrade to whatever could be extracted (possibly nothing)
    Lenient,
}

/// Options for the extraction stage.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable lenient mode (degrade instead of failing).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }
}

/// Extract per-page lines from a PDF file.
pub fn extract_lines_from_path<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> Result<Vec<Line>> {
    let data = fs::read(path)?;
    extract_lines_from_bytes(&data, options)
}

/// Extract per-page lines from in-memory PDF data.
pub fn extract_lines_from_bytes(data: &[u8], options: &ExtractOptions) -> Result<Vec<Line>> {
    match extract_strict(data) {
        Ok(lines) => Ok(lines),
        Err(err) => match options.error_mode {
            ErrorMode::Strict => Err(err),
            ErrorMode::Lenient => {
                log::warn!("extraction failed, continuing with empty document: {err}");
                Ok(Vec::new())
            }
        },
    }
}

fn extract_strict(data: &[u8]) -> Result<Vec<Line>> {
    if !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    // Cheap structural probe before the heavier text extraction pass.
    let doc = lopdf::Document::load_mem(data)?;
    if doc.is_encrypted() {
        return Err(Error::Encrypted);
    }
    drop(doc);

    let pages = pdf_extract::extract_text_from_mem_by_pages(data)?;
    Ok(pages_to_lines(&pages))
}

/// Split per-page text into [`Line`] values with 1-indexed pages and
/// per-page positions.
fn pages_to_lines(pages: &[String]) -> Vec<Line> {
    let mut lines = Vec::new();
    for (page_index, page_text) in pages.iter().enumerate() {
        let page = (page_index + 1) as u32;
        for (position, text) in page_text.split('\n').enumerate() {
            lines.push(Line::new(text, page, position as u32));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_format_strict() {
        let result = extract_lines_from_bytes(b"<!DOCTYPE html>", &ExtractOptions::new());
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_unknown_format_lenient_degrades_to_empty() {
        let options = ExtractOptions::new().lenient();
        let lines = extract_lines_from_bytes(b"not a pdf at all", &options).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_truncated_pdf_lenient() {
        let options = ExtractOptions::new().lenient();
        let lines = extract_lines_from_bytes(b"%PDF-1.7\ngarbage", &options).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_pages_to_lines_indexing() {
        let pages = vec![
            "first line\nsecond line".to_string(),
            "next page".to_string(),
        ];
        let lines = pages_to_lines(&pages);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], Line::new("first line", 1, 0));
        assert_eq!(lines[1], Line::new("second line", 1, 1));
        assert_eq!(lines[2], Line::new("next page", 2, 0));
    }

    #[test]
    fn test_pages_to_lines_empty() {
        assert!(pages_to_lines(&[]).is_empty());
    }
}
