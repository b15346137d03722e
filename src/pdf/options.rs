//! Parsing options and configuration.

use super::PdfBackendKind;

/// Options for extracting text from PDF documents.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Which backend to use
    pub backend: BackendPreference,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (treat unreadable pages as empty).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set backend preference.
    pub fn with_backend(mut self, backend: BackendPreference) -> Self {
        self.backend = backend;
        self
    }
}

/// Error handling mode during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    #[default]
    Strict,
    /// Skip unreadable pages and continue
    Lenient,
}

/// Which PDF backend to open documents with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendPreference {
    /// First available backend in priority order
    #[default]
    Auto,
    /// A specific backend; it must be compiled in
    Only(PdfBackendKind),
}

impl From<PdfBackendKind> for BackendPreference {
    fn from(kind: PdfBackendKind) -> Self {
        BackendPreference::Only(kind)
    }
}
