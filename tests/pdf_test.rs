//! Integration tests for PDF to text conversion.

mod common;

use common::pdf_with_pages;
use docmark::pdf::{extract_pages, PageTextSource};
use docmark::{
    convert_file, pdf_to_text, BackendPreference, ConvertOptions, ErrorMode, OutputTarget,
    ParseOptions, PdfBackendKind, PdfParser, SourceFormat,
};
use tempfile::tempdir;

struct Pages(Vec<&'static str>);

impl PageTextSource for Pages {
    fn page_count(&self) -> usize {
        self.0.len()
    }

    fn page_text(&self, index: usize) -> docmark::Result<String> {
        Ok(self.0[index].to_string())
    }
}

#[test]
fn test_whitespace_page_is_skipped() {
    let pages = extract_pages(&Pages(vec!["Page1", "  \n\t "]), ErrorMode::Strict).unwrap();
    assert_eq!(docmark::render::to_text(&pages), "Page1");
}

#[test]
fn test_pages_join_with_blank_line() {
    let pages = extract_pages(&Pages(vec!["one", "", "two"]), ErrorMode::Strict).unwrap();
    assert_eq!(docmark::render::to_text(&pages), "one\n\ntwo");
}

#[test]
fn test_pdf_to_text_auto_backend() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("two.pdf");
    std::fs::write(&path, pdf_with_pages(&["Hello", "World"])).unwrap();

    let text = pdf_to_text(&path).unwrap();
    assert!(text.contains("Hello"));
    assert!(text.contains("World"));
    assert!(text.find("Hello").unwrap() < text.find("World").unwrap());
}

#[test]
fn test_blank_pdf_page_dropped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gap.pdf");
    std::fs::write(&path, pdf_with_pages(&["First", "", "Last"])).unwrap();

    let output = dir.path().join("gap.md");
    let result =
        convert_file(&path, &OutputTarget::file(&output), &ConvertOptions::default()).unwrap();

    assert_eq!(result.format, SourceFormat::Pdf);
    assert_eq!(result.stats.page_count, 3);
    assert_eq!(result.stats.pages_with_text, 2);
    assert!(!result.content.starts_with(char::is_whitespace));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), result.content);
}

#[cfg(feature = "pdf-extract")]
#[test]
fn test_pdf_extract_pages_join_exactly() {
    let data = pdf_with_pages(&["First", "", "Last"]);
    let parser = PdfParser::from_bytes(&data).unwrap();
    assert_eq!(parser.backend(), PdfBackendKind::PdfExtract);

    let pages = parser.parse().unwrap();
    assert_eq!(pages[0].text, "First");
    assert!(pages[1].is_blank());
    assert_eq!(docmark::render::to_text(&pages), "First\n\nLast");

    let dir = tempdir().unwrap();
    let path = dir.path().join("exact.pdf");
    std::fs::write(&path, &data).unwrap();
    assert_eq!(pdf_to_text(&path).unwrap(), "First\n\nLast");
}

#[cfg(feature = "lopdf")]
#[test]
fn test_lopdf_backend() {
    let data = pdf_with_pages(&["Alpha", "Beta"]);
    let options = ParseOptions::new().with_backend(PdfBackendKind::Lopdf.into());
    let parser = PdfParser::from_bytes_with_options(&data, options).unwrap();

    assert_eq!(parser.backend(), PdfBackendKind::Lopdf);
    assert_eq!(parser.page_count(), 2);
    let pages = parser.parse().unwrap();
    assert!(pages[0].text.contains("Alpha"));
    assert!(pages[1].text.contains("Beta"));
}

#[cfg(feature = "pdf-extract")]
#[test]
fn test_pdf_extract_backend() {
    let data = pdf_with_pages(&["Gamma"]);
    let options = ParseOptions::new().with_backend(PdfBackendKind::PdfExtract.into());
    let parser = PdfParser::from_bytes_with_options(&data, options).unwrap();

    assert_eq!(parser.backend(), PdfBackendKind::PdfExtract);
    let pages = parser.parse().unwrap();
    assert_eq!(pages.len(), 1);
    assert!(pages[0].text.contains("Gamma"));
}

#[test]
fn test_garbage_pdf_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("junk.pdf");
    std::fs::write(&path, b"%PDF-1.4\nthis is not a real document").unwrap();

    let result = pdf_to_text(&path);
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().kind(),
        docmark::ErrorKind::ExtractionFailure
    );
}

#[test]
fn test_auto_selects_first_available() {
    let selected = PdfBackendKind::select(BackendPreference::Auto);
    match PdfBackendKind::available().first() {
        Some(kind) => assert_eq!(selected.unwrap(), *kind),
        None => assert!(matches!(
            selected,
            Err(docmark::Error::MissingDependency(_))
        )),
    }
}
