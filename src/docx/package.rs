//! DOCX package (ZIP container) access.

use std::io::{Cursor, Read};
use std::path::Path;

use zip::ZipArchive;

use super::xml::XmlElement;
use crate::error::{Error, Result};

const PACKAGE_RELS: &str = "_rels/.rels";
const DEFAULT_DOCUMENT_PART: &str = "word/document.xml";
const OFFICE_DOCUMENT_REL: &str = "/officeDocument";
const STYLES_REL: &str = "/styles";

/// An opened DOCX package.
pub struct DocxPackage {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl DocxPackage {
    /// Open a package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Open a package from in-memory bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// Check if the package contains a part.
    pub fn has_part(&self, name: &str) -> bool {
        self.archive.file_names().any(|n| n == name)
    }

    /// Read a part as text. A missing part is an error.
    pub fn read_part(&mut self, name: &str) -> Result<String> {
        self.read_optional_part(name)?
            .ok_or_else(|| Error::Archive(format!("missing part: {}", name)))
    }

    /// Read a part as text, or `None` if the package does not contain it.
    pub fn read_optional_part(&mut self, name: &str) -> Result<Option<String>> {
        if !self.has_part(name) {
            return Ok(None);
        }
        let mut entry = self.archive.by_name(name)?;
        let mut data = Vec::new();
        entry.read_to_end(&mut data)?;

        decode_part(name, &data).map(Some)
    }

    /// Path of the main document part.
    ///
    /// Taken from the package relationships when present, otherwise the
    /// conventional `word/document.xml`.
    pub fn main_document_path(&mut self) -> Result<String> {
        let target = match self.read_optional_part(PACKAGE_RELS)? {
            Some(xml) => find_relationship(&xml, OFFICE_DOCUMENT_REL)?
                .map(|target| resolve_target("", &target)),
            None => None,
        };
        Ok(target.unwrap_or_else(|| DEFAULT_DOCUMENT_PART.to_string()))
    }

    /// Path of the styles part belonging to the given document part, if any.
    pub fn styles_path(&mut self, document_path: &str) -> Result<Option<String>> {
        let (dir, file) = split_part_path(document_path);
        let rels_path = if dir.is_empty() {
            format!("_rels/{}.rels", file)
        } else {
            format!("{}/_rels/{}.rels", dir, file)
        };

        if let Some(xml) = self.read_optional_part(&rels_path)? {
            if let Some(target) = find_relationship(&xml, STYLES_REL)? {
                return Ok(Some(resolve_target(dir, &target)));
            }
        }

        let fallback = if dir.is_empty() {
            "styles.xml".to_string()
        } else {
            format!("{}/styles.xml", dir)
        };
        Ok(self.has_part(&fallback).then_some(fallback))
    }
}

/// Decode an XML part. UTF-8 (with or without BOM) and BOM-marked UTF-16 are accepted.
fn decode_part(name: &str, data: &[u8]) -> Result<String> {
    if let Some(rest) = data.strip_prefix(b"\xEF\xBB\xBF") {
        return utf8_part(name, rest);
    }
    if let Some(rest) = data.strip_prefix(b"\xFF\xFE") {
        return utf16_part(name, rest, u16::from_le_bytes);
    }
    if let Some(rest) = data.strip_prefix(b"\xFE\xFF") {
        return utf16_part(name, rest, u16::from_be_bytes);
    }
    utf8_part(name, data)
}

fn utf8_part(name: &str, data: &[u8]) -> Result<String> {
    std::str::from_utf8(data)
        .map(str::to_string)
        .map_err(|e| Error::Encoding(format!("{} is not valid UTF-8: {}", name, e)))
}

fn utf16_part(name: &str, data: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    if data.len() % 2 != 0 {
        return Err(Error::Encoding(format!(
            "{} has a UTF-16 byte order mark but an odd length",
            name
        )));
    }
    let units = data.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Encoding(format!("{} is not valid UTF-16: {}", name, e)))
}

/// Find the target of the first relationship whose type ends with `type_suffix`.
fn find_relationship(rels_xml: &str, type_suffix: &str) -> Result<Option<String>> {
    let root = XmlElement::parse(rels_xml)?;
    let target = root
        .children_named("Relationship")
        .find(|rel| rel.attr("Type").is_some_and(|t| t.ends_with(type_suffix)))
        .and_then(|rel| rel.attr("Target"))
        .map(str::to_string);
    Ok(target)
}

fn split_part_path(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

/// Resolve a relationship target against the directory of its source part.
fn resolve_target(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}
