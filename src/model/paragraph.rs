//! Paragraph type.

use serde::{Deserialize, Serialize};

/// Marker that flags a style name as a heading style.
const HEADING_MARKER: &str = "Heading";

/// Deepest heading level Word defines; larger numbers are not treated as headings.
pub const MAX_HEADING_LEVEL: usize = 9;

/// A body paragraph: its text and the name of its paragraph style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Concatenated run text
    pub text: String,

    /// Resolved style name (e.g. "Heading 2", "Normal")
    pub style: Option<String>,
}

impl Paragraph {
    /// Create an unstyled paragraph.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// Create a paragraph with the given style name.
    pub fn styled(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Some(style.into()),
        }
    }

    /// Text with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Check if the paragraph carries no visible text.
    pub fn is_empty(&self) -> bool {
        self.trimmed_text().is_empty()
    }

    /// Check if the style name marks a heading, whether or not its level parses.
    pub fn has_heading_style(&self) -> bool {
        self.style
            .as_deref()
            .is_some_and(|s| s.contains(HEADING_MARKER))
    }

    /// Heading level derived from the style name.
    ///
    /// "Heading 2" yields `Some(2)`. A level of zero or below yields `Some(0)`,
    /// a heading with no `#` marks. Styles that mention "Heading" but do not
    /// end in an integer ("Heading X", "Heading 1 Char"), levels above
    /// [`MAX_HEADING_LEVEL`] and non-heading styles yield `None`.
    pub fn heading_level(&self) -> Option<usize> {
        let style = self.style.as_deref()?;
        if !style.contains(HEADING_MARKER) {
            return None;
        }
        let level = style.replace("Heading ", "");
        match level.trim().parse::<i64>() {
            Ok(n) if n <= 0 => Some(0),
            Ok(n) => usize::try_from(n)
                .ok()
                .filter(|&level| level <= MAX_HEADING_LEVEL),
            Err(_) => None,
        }
    }
}
