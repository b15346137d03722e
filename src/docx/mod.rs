//! DOCX parsing module.
//!
//! A DOCX file is a ZIP package of XML parts. [`DocxPackage`] reads parts
//! out of the container, [`StyleSheet`] resolves paragraph style ids to the
//! names Word displays, and [`DocxParser`] walks the document body into a
//! [`Document`](crate::model::Document).

mod package;
mod parser;
mod styles;
mod xml;

pub use package::DocxPackage;
pub use parser::DocxParser;
pub use styles::StyleSheet;
pub use xml::{XmlElement, XmlNode};
