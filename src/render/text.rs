//! Plain text rendering for PDF pages.

use crate::model::PageText;

use super::{ExtractionStats, RenderResult};

const PAGE_SEPARATOR: &str = "\n\n";

/// Join page texts with a blank line, skipping whitespace-only pages.
pub fn to_text(pages: &[PageText]) -> String {
    to_text_with_stats(pages).content
}

/// Join page texts and report how many pages contributed.
pub fn to_text_with_stats(pages: &[PageText]) -> RenderResult {
    let mut stats = ExtractionStats::new();
    let mut parts = Vec::with_capacity(pages.len());

    for page in pages {
        let has_text = !page.is_blank();
        stats.add_page(has_text);
        if has_text {
            parts.push(page.text.as_str());
        } else {
            log::debug!("Page {} has no text", page.number);
        }
    }

    let content = parts.join(PAGE_SEPARATOR);
    stats.count_text(&content);
    RenderResult::new(content, stats)
}
