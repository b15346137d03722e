//! DOCX body parser.

use std::path::Path;

use super::package::DocxPackage;
use super::styles::StyleSheet;
use super::xml::XmlElement;
use crate::error::{Error, Result};
use crate::model::{Document, Paragraph, Table};

/// DOCX document parser.
pub struct DocxParser {
    package: DocxPackage,
}

impl DocxParser {
    /// Open a DOCX file for parsing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let package = DocxPackage::open(path)?;
        Ok(Self { package })
    }

    /// Create a parser from in-memory bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let package = DocxPackage::from_bytes(data)?;
        Ok(Self { package })
    }

    /// Parse the document body into blocks.
    pub fn parse(mut self) -> Result<Document> {
        let document_path = self.package.main_document_path()?;
        let styles = match self.package.styles_path(&document_path)? {
            Some(path) => StyleSheet::parse(&self.package.read_part(&path)?)?,
            None => {
                log::debug!("No styles part, using built-in styles");
                StyleSheet::builtin()
            }
        };

        let xml = self.package.read_part(&document_path)?;
        let root = XmlElement::parse(&xml)?;
        let body = root
            .child("body")
            .ok_or_else(|| Error::Xml(format!("{} has no body element", document_path)))?;

        let doc = parse_body(body, &styles);
        log::debug!(
            "Parsed {}: {} paragraphs, {} tables",
            document_path,
            doc.paragraphs().count(),
            doc.tables().count()
        );
        Ok(doc)
    }
}

/// Collect the direct paragraph and table children of `w:body` in order.
fn parse_body(body: &XmlElement, styles: &StyleSheet) -> Document {
    let mut doc = Document::new();
    for element in body.elements() {
        match element.name.as_str() {
            "p" => {
                let style_id = element
                    .child("pPr")
                    .and_then(|ppr| ppr.child("pStyle"))
                    .and_then(|s| s.attr("val"));
                doc.add_paragraph(Paragraph {
                    text: paragraph_text(element),
                    style: styles.resolve(style_id),
                });
            }
            "tbl" => doc.add_table(parse_table(element)),
            _ => {}
        }
    }
    doc
}

/// Text of a paragraph: its runs, including runs nested in hyperlinks and insertions.
fn paragraph_text(paragraph: &XmlElement) -> String {
    let mut out = String::new();
    collect_runs(paragraph, &mut out);
    out
}

fn collect_runs(container: &XmlElement, out: &mut String) {
    for element in container.elements() {
        match element.name.as_str() {
            "r" => run_text(element, out),
            "hyperlink" | "ins" | "smartTag" | "fldSimple" => collect_runs(element, out),
            _ => {}
        }
    }
}

fn run_text(run: &XmlElement, out: &mut String) {
    for element in run.elements() {
        match element.name.as_str() {
            "t" => out.push_str(&element.text()),
            "tab" | "ptab" => out.push('\t'),
            "br" => {
                if matches!(element.attr("type"), None | Some("textWrapping")) {
                    out.push('\n');
                }
            }
            "cr" => out.push('\n'),
            "noBreakHyphen" => out.push('-'),
            _ => {}
        }
    }
}

/// Widest table Word can produce.
const MAX_TABLE_COLUMNS: usize = 63;

/// Build a table with one entry per grid column in every row.
///
/// Horizontally merged cells repeat their text across the columns they
/// span; vertically merged continuation cells repeat the text of the cell
/// above them. A span never reaches past the declared grid width (or
/// [`MAX_TABLE_COLUMNS`] when the grid is missing).
fn parse_table(tbl: &XmlElement) -> Table {
    let mut table = Table::new();
    let mut previous: Vec<String> = Vec::new();
    let grid_width = match tbl.child("tblGrid").map(|g| g.children_named("gridCol").count()) {
        Some(n) if n > 0 => n.min(MAX_TABLE_COLUMNS),
        _ => MAX_TABLE_COLUMNS,
    };

    for tr in tbl.children_named("tr") {
        let mut row: Vec<String> = Vec::new();
        for tc in tr.children_named("tc") {
            let props = tc.child("tcPr");
            let span = props
                .and_then(|p| p.child("gridSpan"))
                .and_then(|g| g.attr("val"))
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(1)
                .clamp(1, grid_width.saturating_sub(row.len()).max(1));
            let continues_merge = props
                .and_then(|p| p.child("vMerge"))
                .is_some_and(|v| v.attr("val") != Some("restart"));

            let text = if continues_merge {
                previous.get(row.len()).cloned().unwrap_or_default()
            } else {
                cell_text(tc)
            };
            row.extend(std::iter::repeat(text).take(span));
        }
        previous.clone_from(&row);
        table.add_row(row);
    }

    table
}

fn cell_text(tc: &XmlElement) -> String {
    tc.children_named("p")
        .map(paragraph_text)
        .collect::<Vec<_>>()
        .join("\n")
}
