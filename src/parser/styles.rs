//! Paragraph style table and core properties.

use crate::error::Result;
use crate::model::Metadata;
use chrono::{DateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;

/// Paragraph styles of a package: style id to display name.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    names: HashMap<String, String>,
    default_name: Option<String>,
}

impl StyleSheet {
    /// Parse `word/styles.xml`.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut sheet = StyleSheet::default();
        let mut buf = Vec::new();
        let mut current: Option<(String, bool)> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) if e.name().as_ref() == b"w:style" => {
                    current = paragraph_style(&e);
                }
                Event::Empty(e) if e.name().as_ref() == b"w:name" => {
                    if let (Some((id, is_default)), Some(name)) =
                        (current.as_ref(), get_attr(&e, b"w:val"))
                    {
                        if *is_default {
                            sheet.default_name = Some(name.clone());
                        }
                        sheet.names.insert(id.clone(), name);
                    }
                }
                Event::End(e) if e.name().as_ref() == b"w:style" => current = None,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        log::debug!("Loaded {} paragraph styles", sheet.names.len());
        Ok(sheet)
    }

    /// Display name for a style id. Unknown ids resolve to themselves.
    pub fn name_of(&self, style_id: &str) -> String {
        self.names
            .get(style_id)
            .cloned()
            .unwrap_or_else(|| style_id.to_string())
    }

    /// Name of the default paragraph style, or empty.
    pub fn default_name(&self) -> &str {
        self.default_name.as_deref().unwrap_or("")
    }

    /// Number of known paragraph styles.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no paragraph styles are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// `(styleId, is_default)` of a paragraph `w:style` element.
fn paragraph_style(e: &BytesStart) -> Option<(String, bool)> {
    if get_attr(e, b"w:type").as_deref() != Some("paragraph") {
        return None;
    }
    let id = get_attr(e, b"w:styleId")?;
    let is_default = matches!(get_attr(e, b"w:default").as_deref(), Some("1") | Some("true"));
    Some((id, is_default))
}

/// Parse `docProps/core.xml` into metadata fields.
///
/// Malformed core properties are not worth failing a document over, so a
/// parse error simply ends the scan.
pub fn parse_core_properties(xml: &str, metadata: &mut Metadata) {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut field: Option<&'static str> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                field = match e.name().as_ref() {
                    b"dc:title" => Some("title"),
                    b"dc:creator" => Some("creator"),
                    b"dcterms:created" => Some("created"),
                    b"dcterms:modified" => Some("modified"),
                    _ => None,
                };
            }
            Ok(Event::Text(e)) => {
                if let (Some(name), Ok(text)) = (field, e.unescape()) {
                    let text = text.trim();
                    if !text.is_empty() {
                        match name {
                            "title" => metadata.title = Some(text.to_string()),
                            "creator" => metadata.author = Some(text.to_string()),
                            "created" => metadata.created = parse_datetime(text),
                            "modified" => metadata.modified = parse_datetime(text),
                            _ => {}
                        }
                    }
                }
            }
            Ok(Event::End(_)) => field = None,
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
        buf.clear();
    }
}

/// Parse a W3CDTF timestamp such as `2024-01-15T10:30:00Z`.
fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Extract an attribute value by key from an element.
pub(crate) fn get_attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .find(|a| a.as_ref().ok().map(|x| x.key.as_ref()) == Some(key))
        .and_then(|a| a.ok())
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

/// Check if `w:val` is explicitly "0" or "false" (formatting switched off).
pub(crate) fn check_val_off(e: &BytesStart) -> bool {
    matches!(get_attr(e, b"w:val").as_deref(), Some("0") | Some("false"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/></w:style>
  <w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/></w:style>
  <w:style w:type="character" w:styleId="Strong"><w:name w:val="Strong"/></w:style>
</w:styles>"#;

    #[test]
    fn test_style_sheet() {
        let sheet = StyleSheet::parse(STYLES).unwrap();
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.name_of("Heading1"), "heading 1");
        assert_eq!(sheet.name_of("ListBullet"), "List Bullet");
        assert_eq!(sheet.name_of("Strong"), "Strong");
        assert_eq!(sheet.default_name(), "Normal");
    }

    #[test]
    fn test_core_properties() {
        let xml = r#"<cp:coreProperties xmlns:cp="x" xmlns:dc="y" xmlns:dcterms="z">
  <dc:title>Resume</dc:title>
  <dc:creator>Jordan Lee</dc:creator>
  <dcterms:created>2024-01-15T10:30:00Z</dcterms:created>
  <dcterms:modified>not a date</dcterms:modified>
</cp:coreProperties>"#;
        let mut metadata = Metadata::default();
        parse_core_properties(xml, &mut metadata);

        assert_eq!(metadata.title.as_deref(), Some("Resume"));
        assert_eq!(metadata.author.as_deref(), Some("Jordan Lee"));
        assert!(metadata.created.is_some());
        assert!(metadata.modified.is_none());
    }
}
