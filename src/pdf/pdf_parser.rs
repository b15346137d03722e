//! PDF document parser over a selected backend.

use std::path::Path;

use super::{ErrorMode, PageTextSource, ParseOptions, PdfBackendKind};
use crate::error::Result;
use crate::model::PageText;

/// PDF document parser.
pub struct PdfParser {
    backend: PdfBackendKind,
    source: Box<dyn PageTextSource>,
    options: ParseOptions,
}

impl PdfParser {
    /// Open a PDF file for parsing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let backend = PdfBackendKind::select(options.backend)?;
        log::debug!("Opening {} with the {} backend", path.display(), backend);
        let source = backend.open_file(path)?;
        Ok(Self {
            backend,
            source,
            options,
        })
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Create a parser from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let backend = PdfBackendKind::select(options.backend)?;
        let source = backend.open_bytes(data)?;
        Ok(Self {
            backend,
            source,
            options,
        })
    }

    /// The backend this document was opened with.
    pub fn backend(&self) -> PdfBackendKind {
        self.backend
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.source.page_count()
    }

    /// Extract the text of every page.
    pub fn parse(&self) -> Result<Vec<PageText>> {
        extract_pages(self.source.as_ref(), self.options.error_mode)
    }
}

/// Extract the text of every page of `source`, in page order.
///
/// In [`ErrorMode::Lenient`] a page that fails to extract is logged and
/// kept as an empty page; in strict mode the first failure is returned.
pub fn extract_pages(source: &dyn PageTextSource, mode: ErrorMode) -> Result<Vec<PageText>> {
    let count = source.page_count();
    let mut pages = Vec::with_capacity(count);

    for index in 0..count {
        let number = index as u32 + 1;
        match source.page_text(index) {
            Ok(text) => pages.push(PageText::new(number, text)),
            Err(e) if mode == ErrorMode::Lenient => {
                log::warn!("Skipping page {}: {}", number, e.report());
                pages.push(PageText::new(number, String::new()));
            }
            Err(e) => return Err(e),
        }
    }

    log::debug!("Extracted {} pages", pages.len());
    Ok(pages)
}
