//! DOCX document parser using zip and quick-xml.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::detect::{detect_container_from_bytes, verify_package, DOCUMENT_PART};
use crate::error::{Error, Result};
use crate::model::Document;

use super::body::walk_body;
use super::options::{ErrorMode, ParseOptions};
use super::styles::{parse_core_properties, StyleSheet};

const STYLES_PART: &str = "word/styles.xml";
const CORE_PART: &str = "docProps/core.xml";

/// DOCX document parser.
///
/// The package is read fully when the parser is created; parsing itself
/// touches no file handles.
pub struct DocxParser {
    document_xml: String,
    styles_xml: Option<String>,
    core_xml: Option<String>,
    source: Option<String>,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let mut parser = Self::from_bytes_with_options(&data, options)?;
        parser.source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(parser)
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        detect_container_from_bytes(data)?;
        let mut archive = ZipArchive::new(Cursor::new(data))?;
        verify_package(&mut archive)?;

        let document_xml = read_part(&mut archive, DOCUMENT_PART)?
            .ok_or_else(|| Error::MissingPart(DOCUMENT_PART.to_string()))?;
        let styles_xml = read_part(&mut archive, STYLES_PART)?;
        let core_xml = if options.read_metadata {
            read_part(&mut archive, CORE_PART)?
        } else {
            None
        };

        Ok(Self {
            document_xml,
            styles_xml,
            core_xml,
            source: None,
            options,
        })
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DOCX from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Set the source name recorded in the document metadata.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Parse the document and return a structured Document.
    pub fn parse(&self) -> Result<Document> {
        let styles = match &self.styles_xml {
            Some(xml) => StyleSheet::parse(xml).or_else(|e| {
                if self.options.error_mode == ErrorMode::Strict {
                    return Err(e);
                }
                log::warn!("Ignoring malformed {}: {}", STYLES_PART, e);
                Ok(StyleSheet::default())
            })?,
            None => StyleSheet::default(),
        };

        let mut document = Document::new();
        document.metadata.source = self.source.clone();
        if let Some(xml) = &self.core_xml {
            parse_core_properties(xml, &mut document.metadata);
        }

        let document = walk_body(&self.document_xml, &styles, document, &self.options)?;
        log::debug!(
            "Parsed {}: {} paragraphs, {} tables",
            self.source.as_deref().unwrap_or("<memory>"),
            document.paragraphs.len(),
            document.tables.len()
        );
        Ok(document)
    }
}

/// Read a package part as UTF-8, `None` when the part is absent.
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(Some(content))
}
