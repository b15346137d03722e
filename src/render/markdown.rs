//! Markdown rendering for word-processing documents.

use crate::model::{Block, Document, Paragraph, Table};

use super::{ExtractionStats, RenderResult};

/// Separator placed between emitted lines.
const LINE_SEPARATOR: &str = "\n\n";

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document) -> String {
    MarkdownRenderer::new().render(doc).content
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document) -> RenderResult {
    MarkdownRenderer::new().render(doc)
}

/// Ordered lines of Markdown output, joined with a blank line between each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownBlock {
    lines: Vec<String>,
}

impl MarkdownBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Lines emitted so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines emitted.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the lines into the final output.
    pub fn join(&self) -> String {
        self.lines.join(LINE_SEPARATOR)
    }
}

/// Markdown renderer.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    block: MarkdownBlock,
    stats: ExtractionStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a document to Markdown with extraction statistics.
    pub fn render(mut self, doc: &Document) -> RenderResult {
        for block in &doc.blocks {
            match block {
                Block::Paragraph(p) => self.render_paragraph(p),
                Block::Table(t) => self.render_table(t),
            }
        }

        let content = self.block.join();
        self.stats.count_text(&content);
        RenderResult::new(content, self.stats)
    }

    fn render_paragraph(&mut self, para: &Paragraph) {
        if para.is_empty() {
            return;
        }
        let text = para.trimmed_text();
        self.stats.add_paragraph();

        match para.heading_level() {
            Some(level) => {
                self.stats.add_heading();
                self.block.push(format!("{} {}", "#".repeat(level), text));
            }
            None => {
                if para.has_heading_style() {
                    log::debug!(
                        "Style {:?} has no usable level, keeping {:?} as plain text",
                        para.style.as_deref().unwrap_or_default(),
                        text
                    );
                }
                self.block.push(text);
            }
        }
    }

    fn render_table(&mut self, table: &Table) {
        self.stats.add_table(table.row_count());
        self.block.push("");

        for (i, row) in table.rows.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.trim().replace('\n', " "))
                .collect();
            self.block.push(pipe_row(cells.as_slice()));

            if i == 0 {
                self.block.push(pipe_row(vec!["---"; cells.len()].as_slice()));
            }
        }

        self.block.push("");
    }
}

fn pipe_row<S: AsRef<str>>(cells: &[S]) -> String {
    let cells: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();
    format!("| {} |", cells.join(" | "))
}
