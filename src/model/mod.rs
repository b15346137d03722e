//! Document model types shared by the parsers and renderers.
//!
//! DOCX bodies are represented as an ordered list of [`Block`]s. PDF
//! backends produce [`PageText`] values, one per page.

mod document;
mod page;
mod paragraph;
mod table;

pub use document::{Block, Document};
pub use page::PageText;
pub use paragraph::{Paragraph, MAX_HEADING_LEVEL};
pub use table::Table;
