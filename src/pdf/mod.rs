//! PDF text extraction module.
//!
//! Text comes from one of several interchangeable backends behind the
//! [`PageTextSource`] trait. Which backends exist is decided at build time
//! through cargo features; which one is used is decided when a document is
//! opened (see [`PdfBackendKind::select`]).

mod backend;
mod options;
mod pdf_parser;

pub use backend::{PageTextSource, PdfBackendKind};
#[cfg(feature = "lopdf")]
pub use backend::LopdfBackend;
#[cfg(feature = "pdf-extract")]
pub use backend::PdfExtractBackend;
pub use options::{BackendPreference, ErrorMode, ParseOptions};
pub use pdf_parser::{extract_pages, PdfParser};
