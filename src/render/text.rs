//! Plain-text rendering for terminal display.

use crate::model::Outline;

/// Render an outline as an indented plain-text tree.
///
/// H2 entries are indented under H1, H3 under H2; each line carries its
/// page number. An empty outline renders as an empty string.
pub fn to_text(outline: &Outline) -> String {
    let mut out = String::new();
    if !outline.title.is_empty() {
        out.push_str(&outline.title);
        out.push('\n');
    }
    for heading in &outline.headings {
        let indent = "  ".repeat((heading.level.depth() - 1) as usize);
        out.push_str(&format!(
            "{}{} (p. {})\n",
            indent, heading.text, heading.page
        ));
    }
    out
}
