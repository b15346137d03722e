//! Integration tests for DOCX to Markdown conversion.

mod common;

use common::DocxBuilder;
use docmark::{
    convert_and_report, convert_file, docx_to_markdown, parse_docx, ConvertOptions, Error,
    ErrorKind, OutputTarget, SourceFormat,
};
use tempfile::tempdir;

fn headings_docx() -> DocxBuilder {
    DocxBuilder::new()
        .style("Heading1", "heading 1")
        .style("Heading2", "heading 2")
        .style("HeadingX", "Heading X")
        .style("Quote", "Quote")
}

#[test]
fn test_heading_style_becomes_hashes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("intro.docx");
    headings_docx().styled("Heading2", "Intro").write_to(&path);

    let markdown = docx_to_markdown(&path).unwrap();
    assert_eq!(markdown, "## Intro");
}

#[test]
fn test_unparsable_heading_level_is_plain_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("odd.docx");
    headings_docx().styled("HeadingX", "Intro").write_to(&path);

    let markdown = docx_to_markdown(&path).unwrap();
    assert_eq!(markdown, "Intro");
}

#[test]
fn test_table_renders_as_pipe_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.docx");
    DocxBuilder::new()
        .table(&[&["A", "B"], &["1", "2"]])
        .write_to(&path);

    let markdown = docx_to_markdown(&path).unwrap();
    assert_eq!(markdown, "\n\n| A | B |\n\n| --- | --- |\n\n| 1 | 2 |\n\n");
}

#[test]
fn test_multi_paragraph_cell_is_one_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cell.docx");
    DocxBuilder::new().table(&[&["x\ny", "z"]]).write_to(&path);

    let markdown = docx_to_markdown(&path).unwrap();
    assert!(markdown.contains("| x y | z |"));
    assert!(!markdown.contains("x\ny"));
}

#[test]
fn test_blocks_keep_document_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("order.docx");
    headings_docx()
        .styled("Heading1", "Title")
        .paragraph("Before")
        .table(&[&["cell"]])
        .styled("Quote", "After")
        .write_to(&path);

    let markdown = docx_to_markdown(&path).unwrap();
    let title = markdown.find("# Title").unwrap();
    let before = markdown.find("Before").unwrap();
    let cell = markdown.find("| cell |").unwrap();
    let after = markdown.find("After").unwrap();
    assert!(title < before && before < cell && cell < after);
}

#[test]
fn test_empty_paragraphs_are_dropped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gaps.docx");
    DocxBuilder::new()
        .paragraph("one")
        .paragraph("")
        .paragraph("   ")
        .paragraph("two")
        .write_to(&path);

    assert_eq!(docx_to_markdown(&path).unwrap(), "one\n\ntwo");
}

#[test]
fn test_styles_part_is_optional() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bare.docx");
    DocxBuilder::new()
        .styled("Heading3", "Deep")
        .paragraph("body")
        .write_to(&path);

    let doc = parse_docx(&path).unwrap();
    let styles: Vec<_> = doc.paragraphs().map(|p| p.style.clone()).collect();
    assert_eq!(
        styles,
        vec![Some("Heading 3".to_string()), Some("Normal".to_string())]
    );
    assert_eq!(docx_to_markdown(&path).unwrap(), "### Deep\n\nbody");
}

#[test]
fn test_missing_docx_creates_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("absent.docx");
    let output = dir.path().join("absent.md");

    let err = convert_file(&input, &OutputTarget::file(&output), &ConvertOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::MissingInput(_)));
    assert_eq!(err.kind(), ErrorKind::MissingInput);
    assert!(!output.exists());
}

#[test]
fn test_convert_file_writes_markdown() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.docx");
    let output = dir.path().join("report.md");
    headings_docx()
        .styled("Heading1", "Report")
        .paragraph("Summary")
        .table(&[&["k", "v"]])
        .write_to(&input);

    let result =
        convert_file(&input, &OutputTarget::file(&output), &ConvertOptions::default()).unwrap();

    assert_eq!(result.format, SourceFormat::Docx);
    assert_eq!(result.mime_type, "text/markdown");
    assert_eq!(result.stats.heading_count, 1);
    assert_eq!(result.stats.table_count, 1);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), result.content);
}

#[test]
fn test_corrupt_docx_is_extraction_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corrupt.docx");
    std::fs::write(&path, b"PK\x03\x04 definitely not a zip").unwrap();

    let err = docx_to_markdown(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ExtractionFailure);
}

#[test]
fn test_oversized_heading_level_converts_as_text() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("huge.docx");
    let output = dir.path().join("huge.md");
    DocxBuilder::new()
        .style("Huge", "Heading 9223372036854775807")
        .style("Zero", "Heading 0")
        .styled("Huge", "Intro")
        .styled("Zero", "Flat")
        .write_to(&input);

    assert!(convert_and_report(
        &input,
        &OutputTarget::file(&output),
        &ConvertOptions::default()
    ));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "Intro\n\n Flat");
}
