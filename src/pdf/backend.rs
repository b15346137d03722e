//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for per-page text extraction, isolating
//! the concrete PDF libraries (pdf-extract, lopdf) from the conversion logic.

use std::fmt;
use std::path::Path;

use super::BackendPreference;
use crate::error::{Error, Result};

/// Abstract interface for reading text out of a PDF, page by page.
pub trait PageTextSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extracted text of the page at `index` (0-based), empty if it has none.
    fn page_text(&self, index: usize) -> Result<String>;
}

/// The PDF backends this crate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PdfBackendKind {
    /// `pdf-extract` crate, preferred
    PdfExtract,
    /// `lopdf` crate's text extraction, fallback
    Lopdf,
}

impl PdfBackendKind {
    /// All backends in the order they are probed.
    pub const PRIORITY: [PdfBackendKind; 2] = [PdfBackendKind::PdfExtract, PdfBackendKind::Lopdf];

    /// Short name, matching the cargo feature that enables it.
    pub fn name(&self) -> &'static str {
        match self {
            PdfBackendKind::PdfExtract => "pdf-extract",
            PdfBackendKind::Lopdf => "lopdf",
        }
    }

    /// Check if this backend was compiled in.
    pub fn is_available(&self) -> bool {
        match self {
            PdfBackendKind::PdfExtract => cfg!(feature = "pdf-extract"),
            PdfBackendKind::Lopdf => cfg!(feature = "lopdf"),
        }
    }

    /// Compiled-in backends, in priority order.
    pub fn available() -> Vec<PdfBackendKind> {
        Self::PRIORITY
            .into_iter()
            .filter(PdfBackendKind::is_available)
            .collect()
    }

    /// Pick the backend to use for a preference.
    pub fn select(preference: BackendPreference) -> Result<PdfBackendKind> {
        Self::select_from(preference, &Self::available())
    }

    fn select_from(
        preference: BackendPreference,
        available: &[PdfBackendKind],
    ) -> Result<PdfBackendKind> {
        match preference {
            BackendPreference::Auto => available.first().copied().ok_or_else(|| {
                Error::MissingDependency(
                    "no PDF text-extraction backend is available; rebuild with the \
                     `pdf-extract` or `lopdf` feature enabled"
                        .to_string(),
                )
            }),
            BackendPreference::Only(kind) if available.contains(&kind) => Ok(kind),
            BackendPreference::Only(kind) => Err(unavailable(kind)),
        }
    }

    /// Open a PDF file with this backend.
    pub fn open_file<P: AsRef<Path>>(&self, path: P) -> Result<Box<dyn PageTextSource>> {
        let data = std::fs::read(path)?;
        self.open_bytes(&data)
    }

    /// Open an in-memory PDF with this backend.
    pub fn open_bytes(&self, data: &[u8]) -> Result<Box<dyn PageTextSource>> {
        match self {
            PdfBackendKind::PdfExtract => open_pdf_extract(data),
            PdfBackendKind::Lopdf => open_lopdf(data),
        }
    }
}

impl fmt::Display for PdfBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn unavailable(kind: PdfBackendKind) -> Error {
    Error::MissingDependency(format!(
        "the {} backend is not available; rebuild with the `{}` feature enabled",
        kind.name(),
        kind.name()
    ))
}

#[cfg(feature = "pdf-extract")]
fn open_pdf_extract(data: &[u8]) -> Result<Box<dyn PageTextSource>> {
    Ok(Box::new(PdfExtractBackend::load_bytes(data)?))
}

#[cfg(not(feature = "pdf-extract"))]
fn open_pdf_extract(_data: &[u8]) -> Result<Box<dyn PageTextSource>> {
    Err(unavailable(PdfBackendKind::PdfExtract))
}

#[cfg(feature = "lopdf")]
fn open_lopdf(data: &[u8]) -> Result<Box<dyn PageTextSource>> {
    Ok(Box::new(LopdfBackend::load_bytes(data)?))
}

#[cfg(not(feature = "lopdf"))]
fn open_lopdf(_data: &[u8]) -> Result<Box<dyn PageTextSource>> {
    Err(unavailable(PdfBackendKind::Lopdf))
}

// ---------------------------------------------------------------------------
// PdfExtractBackend: backed by pdf-extract
// ---------------------------------------------------------------------------

/// [`PageTextSource`] backed by the `pdf-extract` crate.
///
/// pdf-extract works on whole documents, so every page is extracted when
/// the document is loaded. The page-break newlines pdf-extract writes at the
/// start of each page are removed; other text is kept as extracted.
#[cfg(feature = "pdf-extract")]
pub struct PdfExtractBackend {
    pages: Vec<String>,
}

#[cfg(feature = "pdf-extract")]
impl PdfExtractBackend {
    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        // pdf-extract panics on some malformed documents
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        }));

        match result {
            Ok(Ok(pages)) => Ok(Self {
                pages: pages.into_iter().map(strip_page_break).collect(),
            }),
            Ok(Err(e)) => Err(Error::from(e)),
            Err(_) => Err(Error::TextExtract(
                "pdf-extract panicked on malformed PDF".to_string(),
            )),
        }
    }
}

/// Drop the leading newlines pdf-extract emits when it starts a page.
#[cfg(feature = "pdf-extract")]
fn strip_page_break(text: String) -> String {
    match text.trim_start_matches('\n') {
        rest if rest.len() == text.len() => text,
        rest => rest.to_string(),
    }
}

#[cfg(feature = "pdf-extract")]
impl PageTextSource for PdfExtractBackend {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| page_out_of_range(index, self.pages.len()))
    }
}

// ---------------------------------------------------------------------------
// LopdfBackend: backed by lopdf
// ---------------------------------------------------------------------------

/// [`PageTextSource`] backed by `lopdf::Document`.
#[cfg(feature = "lopdf")]
pub struct LopdfBackend {
    doc: lopdf::Document,
    page_numbers: Vec<u32>,
}

#[cfg(feature = "lopdf")]
impl LopdfBackend {
    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = lopdf::Document::load_mem(data)?;
        let page_numbers = doc.get_pages().keys().copied().collect();
        Ok(Self { doc, page_numbers })
    }
}

#[cfg(feature = "lopdf")]
impl PageTextSource for LopdfBackend {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        let page_num = *self
            .page_numbers
            .get(index)
            .ok_or_else(|| page_out_of_range(index, self.page_numbers.len()))?;
        self.doc
            .extract_text(&[page_num])
            .map_err(|e| Error::PageText {
                page: page_num,
                source: Box::new(e),
            })
    }
}

#[cfg(any(feature = "pdf-extract", feature = "lopdf"))]
fn page_out_of_range(index: usize, count: usize) -> Error {
    Error::PdfParse(format!(
        "page index {} is out of range (document has {} pages)",
        index, count
    ))
}
