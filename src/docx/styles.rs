//! Paragraph style resolution.

use std::collections::HashMap;

use super::xml::XmlElement;
use crate::error::Result;

/// Paragraph styles of a document, keyed by style id.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    names: HashMap<String, String>,
    default_paragraph: Option<String>,
}

impl StyleSheet {
    /// Parse `word/styles.xml`.
    pub fn parse(xml: &str) -> Result<Self> {
        let root = XmlElement::parse(xml)?;
        let mut sheet = Self::default();

        for style in root.children_named("style") {
            if style.attr("type").unwrap_or("paragraph") != "paragraph" {
                continue;
            }
            let Some(id) = style.attr("styleId") else {
                continue;
            };
            let name = style
                .child("name")
                .and_then(|n| n.attr("val"))
                .map(ui_name)
                .unwrap_or_else(|| id.to_string());

            if sheet.default_paragraph.is_none() && is_on(style.attr("default")) {
                sheet.default_paragraph = Some(name.clone());
            }
            sheet.names.insert(id.to_string(), name);
        }

        log::debug!(
            "Loaded {} paragraph styles (default: {:?})",
            sheet.names.len(),
            sheet.default_paragraph
        );
        Ok(sheet)
    }

    /// Styles Word assumes when a package ships without a styles part.
    pub fn builtin() -> Self {
        let mut names = HashMap::new();
        names.insert("Normal".to_string(), "Normal".to_string());
        names.insert("Title".to_string(), "Title".to_string());
        for level in 1..=9 {
            names.insert(format!("Heading{}", level), format!("Heading {}", level));
        }
        Self {
            names,
            default_paragraph: Some("Normal".to_string()),
        }
    }

    /// Resolve a paragraph's style id to its display name.
    ///
    /// A paragraph without a style id, or with an id this sheet does not
    /// define, takes the default paragraph style.
    pub fn resolve(&self, style_id: Option<&str>) -> Option<String> {
        style_id
            .and_then(|id| self.names.get(id))
            .or(self.default_paragraph.as_ref())
            .cloned()
    }

    /// Name of the default paragraph style.
    pub fn default_paragraph(&self) -> Option<&str> {
        self.default_paragraph.as_deref()
    }

    /// Number of paragraph styles defined.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no paragraph styles are defined.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn is_on(value: Option<&str>) -> bool {
    matches!(value, Some("1" | "true" | "on"))
}

/// Map the lowercase names Word stores for built-in styles to the names it shows.
fn ui_name(name: &str) -> String {
    match name {
        "caption" => "Caption".to_string(),
        "footer" => "Footer".to_string(),
        "header" => "Header".to_string(),
        "title" => "Title".to_string(),
        _ => match name.strip_prefix("heading ") {
            Some(level) if level.len() == 1 && level.chars().all(|c| ('1'..='9').contains(&c)) => {
                format!("Heading {}", level)
            }
            _ => name.to_string(),
        },
    }
}
