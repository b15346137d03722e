//! Page-level types.

use serde::{Deserialize, Serialize};

/// Text extracted from a single PDF page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed)
    pub number: u32,

    /// Extracted text, empty when the page has none
    pub text: String,
}

impl PageText {
    /// Create a page text entry.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Check if the page contributes nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
