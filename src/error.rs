//! Error types for docmark library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input document does not exist.
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// No usable PDF text-extraction backend is compiled in.
    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    /// The file format is not recognized as DOCX or PDF.
    #[error("Unknown file format: not a DOCX or PDF document")]
    UnknownFormat,

    /// The file format is recognized but cannot be converted.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The ZIP container of a DOCX package is malformed or incomplete.
    #[error("Archive error: {0}")]
    Archive(String),

    /// The ZIP reader rejected the container.
    #[error("Archive error")]
    Zip(#[source] zip::result::ZipError),

    /// An XML part is structurally wrong.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// The XML reader rejected a part.
    #[error("XML parsing error")]
    XmlSyntax(#[from] quick_xml::Error),

    /// A package part is not in a supported text encoding.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// A PDF backend rejected the document.
    #[error("PDF parsing error")]
    Pdf(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// A PDF backend failed on one page.
    #[error("Text extraction error on page {page}")]
    PageText {
        page: u32,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The job manifest is well-formed JSON but not a usable manifest.
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// The job manifest is not valid JSON for the manifest schema.
    #[error("Invalid manifest")]
    ManifestSyntax(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

/// Coarse classification used by callers that only care how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source path does not exist; nothing was attempted.
    MissingInput,
    /// No extraction backend is available; the process should stop.
    MissingDependency,
    /// Anything that went wrong while reading the document.
    ExtractionFailure,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingInput(_) => ErrorKind::MissingInput,
            Error::MissingDependency(_) => ErrorKind::MissingDependency,
            _ => ErrorKind::ExtractionFailure,
        }
    }

    /// Render the error together with its chain of sources, one per line.
    ///
    /// A source whose message is already part of the line above is skipped.
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        let mut previous = out.clone();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            let message = err.to_string();
            if !previous.contains(&message) {
                out.push_str("\n  caused by: ");
                out.push_str(&message);
            }
            previous = message;
            source = err.source();
        }
        out
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Zip(err),
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlSyntax(quick_xml::Error::InvalidAttr(err))
    }
}

#[cfg(feature = "lopdf")]
impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(Box::new(err)),
        }
    }
}

#[cfg(feature = "pdf-extract")]
impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        match err {
            pdf_extract::OutputError::IoError(e) => Error::Io(e),
            pdf_extract::OutputError::PdfError(e) => Error::Pdf(Box::new(e)),
            pdf_extract::OutputError::FormatError(e) => Error::Pdf(Box::new(e)),
        }
    }
}
