//! Minimal OPC (Office Open XML) package writer shared by the docx and xlsx renderers.

use crate::error::{Error, Result};
use quick_xml::escape::escape;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Relationship type of the main office document part.
pub const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// Relationship type of the core properties part.
pub const REL_CORE_PROPERTIES: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";

const CORE_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.core-properties+xml";

/// One relationship entry of a `.rels` part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship id (`rId1`, ...)
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target part, relative to the source part's folder
    pub target: String,
}

impl Relationship {
    /// Create a relationship.
    pub fn new(id: impl Into<String>, rel_type: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rel_type: rel_type.into(),
            target: target.into(),
        }
    }
}

/// An in-memory package: parts plus their content types.
#[derive(Debug, Default)]
pub struct Package {
    parts: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
}

impl Package {
    /// Create an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an XML part with its content type.
    pub fn add_part(&mut self, name: &str, content_type: &str, xml: String) {
        self.overrides
            .push((format!("/{}", name), content_type.to_string()));
        self.parts.push((name.to_string(), xml));
    }

    /// Add a relationships part (`_rels/.rels`, `word/_rels/document.xml.rels`, ...).
    pub fn add_relationships(&mut self, name: &str, relationships: &[Relationship]) {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for rel in relationships {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape(&rel.id),
                escape(&rel.rel_type),
                escape(&rel.target)
            ));
        }
        xml.push_str("</Relationships>");
        self.parts.push((name.to_string(), xml));
    }

    /// Add `docProps/core.xml` with a title and creator.
    pub fn add_core_properties(&mut self, title: &str, creator: &str) {
        let xml = format!(
            concat!(
                "{}",
                r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
                r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
                r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
                r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
                "<dc:title>{}</dc:title><dc:creator>{}</dc:creator>",
                "</cp:coreProperties>"
            ),
            XML_DECLARATION,
            escape(title),
            escape(creator)
        );
        self.add_part("docProps/core.xml", CORE_CONTENT_TYPE, xml);
    }

    /// Part names in insertion order.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(name, _)| name.as_str())
    }

    /// Serialize the package as a ZIP archive.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(self.content_types().as_bytes())?;

        for (name, xml) in &self.parts {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(xml.as_bytes())?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| Error::Render(format!("Failed to finish package: {}", e)))?;
        Ok(cursor.into_inner())
    }

    fn content_types(&self) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        xml.push_str(
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
        );
        xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
        for (part, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape(part),
                escape(content_type)
            ));
        }
        xml.push_str("</Types>");
        xml
    }
}

/// Standalone XML declaration prefix.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// Escape text for element content or attribute values.
pub fn xml_text(text: &str) -> String {
    escape(strip_invalid_xml_chars(text).as_str()).into_owned()
}

/// Drop characters XML 1.0 cannot carry (control characters other than tab, LF and CR).
fn strip_invalid_xml_chars(text: &str) -> String {
    text.chars()
        .filter(|&c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}
