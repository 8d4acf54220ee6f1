//! Outline assembly.
//!
//! Merges the title extractor's result with the hierarchy builder's
//! heading sequence. No reordering and no deduplication — by default the
//! title and the first heading may share text; the strict policy drops
//! the duplicated heading.

use crate::config::OutlineOptions;
use crate::model::{Heading, Outline};

/// Build the final outline from a title and ordered headings.
pub fn assemble(title: String, mut headings: Vec<Heading>, options: &OutlineOptions) -> Outline {
    if options.strict_title_dedup
        && !title.is_empty()
        && headings.first().map_or(false, |h| h.text == title)
    {
        headings.remove(0);
    }
    Outline::new(title, headings)
}
