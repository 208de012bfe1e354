//! Document-style (DOCX) rendering.

use super::layout::{outline, OutlineBlock};
use super::options::RenderOptions;
use super::package::{
    xml_text, Package, Relationship, REL_CORE_PROPERTIES, REL_OFFICE_DOCUMENT, XML_DECLARATION,
};
use crate::error::Result;
use crate::model::Report;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_NUMBERING: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";

const DOCUMENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const STYLES_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
const NUMBERING_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";

/// Render a report as a `.docx` package.
pub fn to_docx(report: &Report, options: &RenderOptions) -> Result<Vec<u8>> {
    let mut package = Package::new();
    package.add_relationships(
        "_rels/.rels",
        &[
            Relationship::new("rId1", REL_OFFICE_DOCUMENT, "word/document.xml"),
            Relationship::new("rId2", REL_CORE_PROPERTIES, "docProps/core.xml"),
        ],
    );
    package.add_part("word/document.xml", DOCUMENT_TYPE, document_xml(report, options));
    package.add_part("word/styles.xml", STYLES_TYPE, styles_xml(options));
    package.add_part("word/numbering.xml", NUMBERING_TYPE, numbering_xml());
    package.add_relationships(
        "word/_rels/document.xml.rels",
        &[
            Relationship::new("rId1", REL_STYLES, "styles.xml"),
            Relationship::new("rId2", REL_NUMBERING, "numbering.xml"),
        ],
    );
    package.add_core_properties(&options.title, env!("CARGO_PKG_NAME"));
    package.to_bytes()
}

/// The `word/document.xml` part.
pub fn document_xml(report: &Report, options: &RenderOptions) -> String {
    let mut body = String::new();
    for block in outline(report, options) {
        match block {
            OutlineBlock::Title(text) => body.push_str(&paragraph("Title", &text)),
            OutlineBlock::Heading { level, text } => {
                body.push_str(&paragraph(&format!("Heading{}", level), &text))
            }
            OutlineBlock::Item { text, source } => {
                let text = match source {
                    Some(source) => format!("{} [{}]", text, source),
                    None => text,
                };
                body.push_str(&paragraph("ListBullet", &text));
            }
        }
    }

    format!(
        r#"{}<w:document xmlns:w="{}"><w:body>{}<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr></w:body></w:document>"#,
        XML_DECLARATION, W_NS, body
    )
}

fn paragraph(style_id: &str, text: &str) -> String {
    format!(
        r#"<w:p><w:pPr><w:pStyle w:val="{}"/></w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        style_id,
        xml_text(text)
    )
}

fn styles_xml(options: &RenderOptions) -> String {
    let font = xml_text(&options.font_name);
    let half_points = options.font_size_pt * 2;
    let heading = |id: &str, name: &str, size: u32, outline: u8| {
        format!(
            r#"<w:style w:type="paragraph" w:styleId="{id}"><w:name w:val="{name}"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="240" w:after="80"/><w:outlineLvl w:val="{outline}"/></w:pPr><w:rPr><w:b/><w:sz w:val="{size}"/></w:rPr></w:style>"#
        )
    };

    format!(
        concat!(
            "{decl}",
            r#"<w:styles xmlns:w="{ns}">"#,
            r#"<w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/><w:sz w:val="{sz}"/></w:rPr></w:rPrDefault></w:docDefaults>"#,
            r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/><w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/><w:sz w:val="{sz}"/></w:rPr></w:style>"#,
            r#"<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:spacing w:after="240"/></w:pPr><w:rPr><w:sz w:val="56"/></w:rPr></w:style>"#,
            "{h1}{h2}",
            r#"<w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/><w:basedOn w:val="Normal"/><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr><w:ind w:left="360" w:hanging="360"/></w:pPr></w:style>"#,
            "</w:styles>"
        ),
        decl = XML_DECLARATION,
        ns = W_NS,
        font = font,
        sz = half_points,
        h1 = heading("Heading1", "heading 1", 32, 0),
        h2 = heading("Heading2", "heading 2", 26, 1),
    )
}

fn numbering_xml() -> String {
    format!(
        concat!(
            "{}",
            r#"<w:numbering xmlns:w="{}">"#,
            r#"<w:abstractNum w:abstractNumId="0"><w:multiLevelType w:val="singleLevel"/>"#,
            r#"<w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="•"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="360" w:hanging="360"/></w:pPr></w:lvl>"#,
            r#"</w:abstractNum><w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>"#,
            "</w:numbering>"
        ),
        XML_DECLARATION, W_NS
    )
}
