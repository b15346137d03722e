//! DOCX document converter implementation.

use crate::detect::SourceFormat;
use crate::docx::DocxParser;
use crate::error::Result;
use crate::model::Document;
use crate::render::to_markdown_with_stats;
use std::path::Path;

use super::{ensure_input_exists, ConvertOptions, ConvertResult, DocumentConverter};

/// DOCX document converter.
///
/// Converts word-processing documents to Markdown.
#[derive(Debug, Clone, Default)]
pub struct DocxConverter {
    _private: (),
}

impl DocxConverter {
    /// Create a new DOCX converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn convert_document(&self, doc: Document) -> ConvertResult {
        let rendered = to_markdown_with_stats(&doc);
        ConvertResult::new(rendered.content, SourceFormat::Docx).with_stats(rendered.stats)
    }
}

impl DocumentConverter for DocxConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn convert(&self, path: &Path, _options: &ConvertOptions) -> Result<ConvertResult> {
        ensure_input_exists(path)?;
        let doc = DocxParser::open(path)?.parse()?;
        Ok(self.convert_document(doc))
    }

    fn convert_bytes(&self, bytes: &[u8], _options: &ConvertOptions) -> Result<ConvertResult> {
        let doc = DocxParser::from_bytes(bytes.to_vec())?.parse()?;
        Ok(self.convert_document(doc))
    }
}
