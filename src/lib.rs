//! # docmark
//!
//! Extract readable content from office documents.
//!
//! DOCX files become Markdown: heading styles turn into `#` headings, other
//! paragraphs are kept as plain text and tables become pipe tables, all in
//! document order. PDF files become plain text, one block per page.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> docmark::Result<()> {
//!     let markdown = docmark::docx_to_markdown("report.docx")?;
//!     println!("{}", markdown);
//!
//!     let text = docmark::pdf_to_text("scan.pdf")?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **`pdf-extract`** (default): PDF text through the `pdf-extract` crate
//! - **`lopdf`** (default): PDF text through `lopdf`'s content-stream reader
//!
//! With neither feature enabled, PDF conversion fails with
//! [`Error::MissingDependency`].

pub mod convert;
pub mod detect;
pub mod docx;
pub mod error;
pub mod manifest;
pub mod model;
pub mod output;
pub mod pdf;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter};
pub use detect::{detect_format_from_bytes, detect_format_from_path, SourceFormat};
pub use error::{Error, ErrorKind, Result};
pub use manifest::{Job, Manifest};
pub use model::{Block, Document, PageText, Paragraph, Table};
pub use output::{default_output_path, OutputTarget};
pub use pdf::{BackendPreference, ErrorMode, ParseOptions, PdfBackendKind, PdfParser};
pub use render::ExtractionStats;

use docx::DocxParser;
use std::path::Path;

/// Parse a DOCX file into its paragraphs and tables.
pub fn parse_docx<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    convert::ensure_input_exists(path)?;
    DocxParser::open(path)?.parse()
}

/// Convert a DOCX file to Markdown.
///
/// # Example
///
/// ```no_run
/// let markdown = docmark::docx_to_markdown("document.docx").unwrap();
/// std::fs::write("document.md", markdown).unwrap();
/// ```
pub fn docx_to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_docx(path)?;
    Ok(render::to_markdown(&doc))
}

/// Extract the text of every page of a PDF file.
pub fn extract_pdf_pages<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Vec<PageText>> {
    let path = path.as_ref();
    convert::ensure_input_exists(path)?;
    PdfParser::open_with_options(path, options)?.parse()
}

/// Convert a PDF file to plain text using the first available backend.
///
/// Pages without text are dropped; the rest are separated by a blank line.
///
/// # Example
///
/// ```no_run
/// let text = docmark::pdf_to_text("document.pdf").unwrap();
/// println!("{}", text);
/// ```
pub fn pdf_to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let pages = extract_pdf_pages(path, ParseOptions::default())?;
    Ok(render::to_text(&pages))
}

/// Convert `input` by its format and write the result to `output`.
///
/// Nothing is written unless the conversion succeeds.
pub fn convert_file<P: AsRef<Path>>(
    input: P,
    output: &OutputTarget,
    options: &ConvertOptions,
) -> Result<ConvertResult> {
    let registry = ConverterRegistry::with_defaults();
    let result = registry.convert(input.as_ref(), options)?;
    output.write(&result.content)?;
    Ok(result)
}

/// Convert `input` into `output`, logging progress instead of returning errors.
///
/// Returns `true` when the output was written.
pub fn convert_and_report<P: AsRef<Path>>(
    input: P,
    output: &OutputTarget,
    options: &ConvertOptions,
) -> bool {
    let input = input.as_ref();
    if !input.exists() {
        log::error!("{}", Error::MissingInput(input.to_path_buf()));
        return false;
    }

    log::info!("Extracting text from: {}", input.display());
    match convert_file(input, output, options) {
        Ok(result) => {
            log::info!(
                "Successfully created: {} ({} bytes)",
                output,
                result.content_len()
            );
            true
        }
        Err(e) => {
            log::error!("Error converting {}: {}", input.display(), e.report());
            false
        }
    }
}
