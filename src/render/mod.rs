//! Rendering module for turning parsed documents into output strings.

mod markdown;
mod result;
mod text;

pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownBlock, MarkdownRenderer};
pub use result::{ExtractionStats, RenderResult};
pub use text::{to_text, to_text_with_stats};
