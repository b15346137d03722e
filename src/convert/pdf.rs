//! PDF document converter implementation.

use crate::detect::SourceFormat;
use crate::error::Result;
use crate::model::PageText;
use crate::pdf::{ParseOptions, PdfParser};
use crate::render::to_text_with_stats;
use std::path::Path;

use super::{ensure_input_exists, ConvertOptions, ConvertResult, DocumentConverter};

/// PDF document converter.
///
/// Converts PDF documents to plain text, one block per page.
#[derive(Debug, Clone, Default)]
pub struct PdfConverter {
    _private: (),
}

impl PdfConverter {
    /// Create a new PDF converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn build_parse_options(&self, options: &ConvertOptions) -> ParseOptions {
        ParseOptions::new()
            .with_backend(options.pdf_backend)
            .with_error_mode(options.error_mode)
    }

    fn convert_pages(&self, parser: &PdfParser) -> Result<ConvertResult> {
        let pages: Vec<PageText> = parser.parse()?;
        let rendered = to_text_with_stats(&pages);
        log::debug!(
            "{} of {} pages had text ({} backend)",
            rendered.stats.pages_with_text,
            rendered.stats.page_count,
            parser.backend()
        );
        Ok(ConvertResult::new(rendered.content, SourceFormat::Pdf).with_stats(rendered.stats))
    }
}

impl DocumentConverter for PdfConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        ensure_input_exists(path)?;
        let parser = PdfParser::open_with_options(path, self.build_parse_options(options))?;
        self.convert_pages(&parser)
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let parser = PdfParser::from_bytes_with_options(bytes, self.build_parse_options(options))?;
        self.convert_pages(&parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_pdf_converter_extensions() {
        let converter = PdfConverter::new();
        assert_eq!(converter.supported_extensions(), &["pdf"]);
        assert!(converter.supports_extension("pdf"));
        assert!(converter.supports_extension("PDF"));
        assert!(!converter.supports_extension("docx"));
    }

    #[test]
    fn test_pdf_converter_name() {
        let converter = PdfConverter::new();
        assert_eq!(converter.name(), "pdf");
    }

    #[test]
    fn test_missing_input_checked_first() {
        let converter = PdfConverter::new();
        let result = converter.convert(Path::new("no/such/file.pdf"), &ConvertOptions::default());
        assert!(matches!(result, Err(Error::MissingInput(_))));
    }
}
