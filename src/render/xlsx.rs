//! Tabular (XLSX) rendering.

use super::layout::{sheets, Sheet};
use super::options::RenderOptions;
use super::package::{
    xml_text, Package, Relationship, REL_CORE_PROPERTIES, REL_OFFICE_DOCUMENT, XML_DECLARATION,
};
use crate::error::Result;
use crate::model::Report;

const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const REL_WORKSHEET: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

const WORKBOOK_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
const WORKSHEET_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
const STYLES_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";

/// Render a report as an `.xlsx` workbook.
///
/// A workbook needs at least one sheet, so an empty report still gets a
/// single header-only sheet.
pub fn to_xlsx(report: &Report, options: &RenderOptions) -> Result<Vec<u8>> {
    let mut tabs = sheets(report, options);
    if tabs.is_empty() {
        tabs.push(Sheet {
            name: "Bullets".to_string(),
            columns: vec!["Bullet", "SourceFile"],
            rows: Vec::new(),
        });
    }

    let mut package = Package::new();
    package.add_relationships(
        "_rels/.rels",
        &[
            Relationship::new("rId1", REL_OFFICE_DOCUMENT, "xl/workbook.xml"),
            Relationship::new("rId2", REL_CORE_PROPERTIES, "docProps/core.xml"),
        ],
    );
    package.add_part("xl/workbook.xml", WORKBOOK_TYPE, workbook_xml(&tabs));

    let mut rels = Vec::with_capacity(tabs.len() + 1);
    for (index, sheet) in tabs.iter().enumerate() {
        let n = index + 1;
        package.add_part(
            &format!("xl/worksheets/sheet{}.xml", n),
            WORKSHEET_TYPE,
            worksheet_xml(sheet),
        );
        rels.push(Relationship::new(
            format!("rId{}", n),
            REL_WORKSHEET,
            format!("worksheets/sheet{}.xml", n),
        ));
    }
    rels.push(Relationship::new(
        format!("rId{}", tabs.len() + 1),
        REL_STYLES,
        "styles.xml",
    ));
    package.add_part("xl/styles.xml", STYLES_TYPE, styles_xml());
    package.add_relationships("xl/_rels/workbook.xml.rels", &rels);
    package.add_core_properties(&options.title, env!("CARGO_PKG_NAME"));

    log::debug!("Rendered workbook with {} sheets", tabs.len());
    package.to_bytes()
}

fn workbook_xml(tabs: &[Sheet]) -> String {
    let entries: String = tabs
        .iter()
        .enumerate()
        .map(|(index, sheet)| {
            format!(
                r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                xml_text(&sheet.name),
                index + 1,
                index + 1
            )
        })
        .collect();

    format!(
        r#"{}<workbook xmlns="{}" xmlns:r="{}"><sheets>{}</sheets></workbook>"#,
        XML_DECLARATION, MAIN_NS, R_NS, entries
    )
}

/// The worksheet part of one sheet: a bold header row, then data rows.
pub fn worksheet_xml(sheet: &Sheet) -> String {
    let mut rows = String::new();
    rows.push_str(&row_xml(1, sheet.columns.iter().copied(), Some(1)));
    for (index, row) in sheet.rows.iter().enumerate() {
        rows.push_str(&row_xml(index + 2, row.iter().map(String::as_str), None));
    }

    let cols: String = (1..=sheet.columns.len())
        .map(|n| {
            let width = if sheet.columns[n - 1] == "Bullet" { 80 } else { 30 };
            format!(r#"<col min="{n}" max="{n}" width="{width}" customWidth="1"/>"#)
        })
        .collect();

    format!(
        r#"{}<worksheet xmlns="{}"><cols>{}</cols><sheetData>{}</sheetData></worksheet>"#,
        XML_DECLARATION, MAIN_NS, cols, rows
    )
}

fn row_xml<'a>(number: usize, cells: impl Iterator<Item = &'a str>, style: Option<u32>) -> String {
    let style = style.map(|s| format!(r#" s="{}""#, s)).unwrap_or_default();
    let cells: String = cells
        .enumerate()
        .map(|(index, value)| {
            format!(
                r#"<c r="{}{}"{} t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                column_letters(index + 1),
                number,
                style,
                xml_text(value)
            )
        })
        .collect();
    format!(r#"<row r="{}">{}</row>"#, number, cells)
}

/// Spreadsheet column name for a 1-based index (`1` is `A`, `27` is `AA`).
pub fn column_letters(mut index: usize) -> String {
    let mut letters = Vec::new();
    while index > 0 {
        let rem = (index - 1) % 26;
        letters.push(b'A' + rem as u8);
        index = (index - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

fn styles_xml() -> String {
    format!(
        concat!(
            "{}",
            r#"<styleSheet xmlns="{}">"#,
            r#"<fonts count="2"><font><sz val="11"/><name val="Calibri"/></font><font><b/><sz val="11"/><name val="Calibri"/></font></fonts>"#,
            r#"<fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>"#,
            r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#,
            r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#,
            r#"<cellXfs count="2"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/><xf numFmtId="0" fontId="1" fillId="0" borderId="0" xfId="0" applyFont="1"/></cellXfs>"#,
            r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#,
            "</styleSheet>"
        ),
        XML_DECLARATION, MAIN_NS
    )
}
