//! # untoc
//!
//! Heuristic document outline extraction for Rust.
//!
//! This library derives a hierarchical outline — a document title plus
//! H1/H2/H3 headings with page numbers — from the plain text of a
//! paginated document. Classification uses only textual and typographic
//! heuristics (numbering schemes, keyword headers, capitalization,
//! colon-terminated phrases); no font or layout metadata is consulted.
//!
//! ## Quick Start
//!
//! ```no_run
//! use untoc::{outline_file, render, JsonFormat};
//!
//! fn main() -> untoc::Result<()> {
//!     let outline = outline_file("document.pdf")?;
//!     println!("{}", render::to_json(&outline, JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! The core (`outline_lines`) is a total, deterministic function over line
//! sequences: it never fails on textual content, and an empty input yields
//! an empty outline. Only the PDF extraction collaborator and file I/O
//! return errors.
//!
//! ## Features
//!
//! - **Numbering-aware classification**: "1.", "1.1", "1.1.1" map to H1-H3
//! - **Keyword headers**: "Introduction", "References", ... force H1
//! - **Monotonic nesting**: a depth-stack automaton prevents orphan levels
//! - **Title scoring**: the best early-page line becomes the title
//! - **Batch mode**: whole directories processed in parallel with Rayon

pub mod assemble;
pub mod batch;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod hierarchy;
pub mod model;
pub mod normalize;
pub mod render;
pub mod title;

// Re-export commonly used types
pub use batch::{BatchOptions, BatchSummary};
pub use classify::Classifier;
pub use config::OutlineOptions;
pub use error::{Error, Result};
pub use extract::{ErrorMode, ExtractOptions};
pub use hierarchy::HierarchyBuilder;
pub use model::{Confidence, Heading, HeadingCandidate, HeadingLevel, LevelHint, Line, Outline};
pub use render::JsonFormat;

use std::path::Path;

/// Derive an outline from an ordered line sequence.
///
/// This is the core entry point: pure, synchronous, and total — arbitrary
/// text never produces an error, and an empty input yields an outline with
/// an empty title and no headings.
///
/// # Example
///
/// ```
/// use untoc::{outline_lines, Line, OutlineOptions};
///
/// let lines = vec![
///     Line::new("1. Introduction", 1, 0),
///     Line::new("1.1 Background", 1, 1),
/// ];
/// let outline = outline_lines(&lines, &OutlineOptions::default());
/// assert_eq!(outline.headings.len(), 2);
/// ```
pub fn outline_lines(lines: &[Line], options: &OutlineOptions) -> Outline {
    let normalized = normalize::normalize_lines(lines);
    let title = title::extract_title(&normalized, options);
    let classifier = Classifier::new(options);
    let candidates = classifier.classify_lines(&normalized);
    let headings = HierarchyBuilder::new(options).resolve(&candidates);
    assemble::assemble(title, headings, options)
}

/// Extract an outline from a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// use untoc::outline_file;
///
/// let outline = outline_file("document.pdf").unwrap();
/// println!("{} headings", outline.len());
/// ```
pub fn outline_file<P: AsRef<Path>>(path: P) -> Result<Outline> {
    outline_file_with_options(path, &OutlineOptions::default(), &ExtractOptions::default())
}

/// Extract an outline from a PDF file with custom options.
pub fn outline_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &OutlineOptions,
    extract_options: &ExtractOptions,
) -> Result<Outline> {
    let lines = extract::extract_lines_from_path(path, extract_options)?;
    Ok(outline_lines(&lines, options))
}

/// Extract an outline from in-memory PDF data.
pub fn outline_bytes(data: &[u8]) -> Result<Outline> {
    let lines = extract::extract_lines_from_bytes(data, &ExtractOptions::default())?;
    Ok(outline_lines(&lines, &OutlineOptions::default()))
}

/// Extract an outline from a PDF file and render it as JSON.
///
/// # Example
///
/// ```no_run
/// use untoc::{to_json, JsonFormat};
///
/// let json = to_json("document.pdf", JsonFormat::Pretty).unwrap();
/// std::fs::write("document.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let outline = outline_file(path)?;
    render::to_json(&outline, format)
}

/// Builder for outline extraction.
///
/// # Example
///
/// ```no_run
/// use untoc::{Untoc, JsonFormat};
///
/// let json = Untoc::new()
///     .lenient()
///     .strict_title()
///     .parse("document.pdf")?
///     .to_json(JsonFormat::Compact)?;
/// # Ok::<(), untoc::Error>(())
/// ```
pub struct Untoc {
    outline_options: OutlineOptions,
    extract_options: ExtractOptions,
}

impl Untoc {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            outline_options: OutlineOptions::default(),
            extract_options: ExtractOptions::default(),
        }
    }

    /// Enable lenient extraction (degrade to an empty document on failure).
    pub fn lenient(mut self) -> Self {
        self.extract_options = self.extract_options.lenient();
        self
    }

    /// Set the maximum heading length in characters.
    pub fn with_max_heading_chars(mut self, chars: usize) -> Self {
        self.outline_options = self.outline_options.with_max_heading_chars(chars);
        self
    }

    /// Set the number of pages scanned for the title.
    pub fn with_title_scan_pages(mut self, pages: u32) -> Self {
        self.outline_options = self.outline_options.with_title_scan_pages(pages);
        self
    }

    /// Set the level assigned to all-caps headings.
    pub fn with_allcaps_level(mut self, level: HeadingLevel) -> Self {
        self.outline_options = self.outline_options.with_allcaps_level(level);
        self
    }

    /// Drop the first heading when it duplicates the title verbatim.
    pub fn strict_title(mut self) -> Self {
        self.outline_options = self.outline_options.strict_title();
        self
    }

    /// Replace the keyword header set.
    pub fn with_keyword_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outline_options = self.outline_options.with_keyword_headers(headers);
        self
    }

    /// Parse a PDF file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UntocResult> {
        let outline =
            outline_file_with_options(path, &self.outline_options, &self.extract_options)?;
        Ok(UntocResult { outline })
    }

    /// Derive an outline directly from a line sequence.
    pub fn outline(self, lines: &[Line]) -> Outline {
        outline_lines(lines, &self.outline_options)
    }
}

impl Default for Untoc {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of an outline extraction.
pub struct UntocResult {
    /// The extracted outline
    pub outline: Outline,
}

impl UntocResult {
    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.outline, format)
    }

    /// Convert to an indented plain-text tree.
    pub fn to_text(&self) -> String {
        render::to_text(&self.outline)
    }

    /// Get the outline.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }
}
