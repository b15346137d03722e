//! Source format detection.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::docx::DocxPackage;
use crate::error::{Error, Result};

/// Document formats docmark can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Word-processing document (Office Open XML)
    Docx,
    /// Portable Document Format
    Pdf,
}

impl SourceFormat {
    /// Match a file extension, case-insensitively and without the dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "docx" => Some(SourceFormat::Docx),
            "pdf" => Some(SourceFormat::Pdf),
            _ => None,
        }
    }

    /// Match the extension of a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Docx => "docx",
            SourceFormat::Pdf => "pdf",
        }
    }

    /// MIME type of the text this format converts to.
    pub fn output_mime_type(&self) -> &'static str {
        match self {
            SourceFormat::Docx => "text/markdown",
            SourceFormat::Pdf => "text/plain",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Docx => f.write_str("DOCX"),
            SourceFormat::Pdf => f.write_str("PDF"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// ZIP local file header signature
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Detect the format of a file from its content.
///
/// # Example
/// ```no_run
/// use docmark::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let data = std::fs::read(path)?;
    detect_format_from_bytes(&data)
}

/// Detect the format of a document from its bytes.
///
/// PDFs are recognized by their header. A ZIP archive counts as DOCX only
/// if it contains a main document part.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SourceFormat> {
    if is_pdf_bytes(data) {
        return Ok(SourceFormat::Pdf);
    }

    if data.starts_with(ZIP_MAGIC) {
        let mut package = DocxPackage::from_bytes(data.to_vec()).map_err(|e| {
            log::debug!("ZIP signature but unreadable archive: {}", e.report());
            Error::UnknownFormat
        })?;
        let document = package.main_document_path()?;
        if package.has_part(&document) {
            return Ok(SourceFormat::Docx);
        }
        return Err(Error::UnsupportedFormat(
            "ZIP archive without a word-processing document".to_string(),
        ));
    }

    Err(Error::UnknownFormat)
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return false;
    }
    let version = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    is_valid_version(version)
}

/// Check a version like "1.7".
fn is_valid_version(version: &[u8]) -> bool {
    version.len() == 3
        && version[0].is_ascii_digit()
        && version[1] == b'.'
        && version[2].is_ascii_digit()
}
