//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown or plain text)
    pub content: String,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: ExtractionStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected during content extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Total number of pages processed
    pub page_count: u32,

    /// Pages that contributed text
    pub pages_with_text: u32,

    /// Number of non-empty paragraphs rendered
    pub paragraph_count: u32,

    /// Number of paragraphs rendered as headings
    pub heading_count: u32,

    /// Number of tables rendered
    pub table_count: u32,

    /// Number of table rows rendered
    pub table_row_count: u32,

    /// Character count of the rendered output
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self, rows: usize) {
        self.table_count += 1;
        self.table_row_count += rows as u32;
    }

    /// Increment page count.
    pub fn add_page(&mut self, has_text: bool) {
        self.page_count += 1;
        if has_text {
            self.pages_with_text += 1;
        }
    }

    /// Record the character count of the final output.
    pub fn count_text(&mut self, text: &str) {
        self.char_count = text.chars().count() as u32;
    }
}
