//! Streaming walk over `word/document.xml`.

use super::options::{ErrorMode, ParseOptions};
use super::styles::{check_val_off, get_attr, StyleSheet};
use crate::error::Result;
use crate::model::{Document, Paragraph, Table, TableCell, TableRow, TextRun, TextStyle};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// An open table and its current row and cell.
#[derive(Default)]
struct TableFrame {
    table: Table,
    row: Option<TableRow>,
    cell: Option<TableCell>,
}

/// Walk state for one document body.
struct BodyWalker<'a> {
    styles: &'a StyleSheet,
    include_tables: bool,
    document: Document,
    tables: Vec<TableFrame>,
    paragraph: Option<Paragraph>,
    run_style: TextStyle,
    in_paragraph_props: bool,
    in_run: bool,
    in_run_props: bool,
    in_text: bool,
    skip_depth: usize,
}

impl<'a> BodyWalker<'a> {
    fn new(styles: &'a StyleSheet, document: Document, include_tables: bool) -> Self {
        Self {
            styles,
            include_tables,
            document,
            tables: Vec::new(),
            paragraph: None,
            run_style: TextStyle::default(),
            in_paragraph_props: false,
            in_run: false,
            in_run_props: false,
            in_text: false,
            skip_depth: 0,
        }
    }

    fn start(&mut self, e: &BytesStart) {
        let name = e.name();
        if is_skipped_container(name.as_ref()) {
            self.skip_depth += 1;
            return;
        }
        if self.skip_depth > 0 {
            return;
        }
        match name.as_ref() {
            b"w:tbl" => self.tables.push(TableFrame::default()),
            b"w:tr" => {
                if let Some(frame) = self.tables.last_mut() {
                    frame.row = Some(TableRow::default());
                }
            }
            b"w:tc" => {
                if let Some(frame) = self.tables.last_mut() {
                    frame.cell = Some(TableCell::empty());
                }
            }
            b"w:p" => self.open_paragraph(),
            b"w:pPr" => self.in_paragraph_props = true,
            b"w:r" => {
                self.in_run = true;
                self.run_style = TextStyle::default();
            }
            b"w:rPr" if self.in_run => self.in_run_props = true,
            b"w:t" if self.in_run => self.in_text = true,
            _ => self.property(e),
        }
    }

    fn empty(&mut self, e: &BytesStart) {
        if self.skip_depth > 0 {
            return;
        }
        match e.name().as_ref() {
            b"w:p" => {
                self.open_paragraph();
                self.close_paragraph();
            }
            b"w:tab" if self.in_run && !self.in_run_props => {
                if let Some(p) = self.paragraph.as_mut() {
                    p.add_tab();
                }
            }
            b"w:br" | b"w:cr" if self.in_run => {
                if let Some(p) = self.paragraph.as_mut() {
                    p.add_line_break();
                }
            }
            _ => self.property(e),
        }
    }

    /// Paragraph style and run formatting switches.
    fn property(&mut self, e: &BytesStart) {
        match e.name().as_ref() {
            b"w:pStyle" if self.in_paragraph_props => {
                if let (Some(p), Some(id)) = (self.paragraph.as_mut(), get_attr(e, b"w:val")) {
                    p.style.name = self.styles.name_of(&id);
                    p.style.style_id = Some(id);
                }
            }
            b"w:b" if self.in_run_props => self.run_style.bold = !check_val_off(e),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.skip_depth > 0 || !self.in_text || text.is_empty() {
            return;
        }
        if let Some(p) = self.paragraph.as_mut() {
            p.add_run(TextRun {
                text: text.to_string(),
                style: self.run_style.clone(),
            });
        }
    }

    fn end(&mut self, name: &[u8]) {
        if is_skipped_container(name) {
            self.skip_depth = self.skip_depth.saturating_sub(1);
            return;
        }
        if self.skip_depth > 0 {
            return;
        }
        match name {
            b"w:p" => self.close_paragraph(),
            b"w:pPr" => self.in_paragraph_props = false,
            b"w:r" => {
                self.in_run = false;
                self.in_run_props = false;
                self.in_text = false;
            }
            b"w:rPr" => self.in_run_props = false,
            b"w:t" => self.in_text = false,
            b"w:tc" => {
                if let Some(frame) = self.tables.last_mut() {
                    if let (Some(row), Some(cell)) = (frame.row.as_mut(), frame.cell.take()) {
                        row.cells.push(cell);
                    }
                }
            }
            b"w:tr" => {
                if let Some(frame) = self.tables.last_mut() {
                    if let Some(row) = frame.row.take() {
                        frame.table.add_row(row);
                    }
                }
            }
            b"w:tbl" => self.close_table(),
            _ => {}
        }
    }

    fn open_paragraph(&mut self) {
        let mut paragraph = Paragraph::new();
        paragraph.style.name = self.styles.default_name().to_string();
        self.paragraph = Some(paragraph);
        self.in_paragraph_props = false;
    }

    fn close_paragraph(&mut self) {
        let Some(paragraph) = self.paragraph.take() else {
            return;
        };
        match self.tables.last_mut() {
            Some(frame) => {
                if let Some(cell) = frame.cell.as_mut() {
                    cell.content.push(paragraph);
                }
            }
            None => self.document.add_paragraph(paragraph),
        }
    }

    fn close_table(&mut self) {
        let Some(frame) = self.tables.pop() else {
            return;
        };
        match self.tables.last_mut() {
            Some(parent) => {
                if let Some(cell) = parent.cell.as_mut() {
                    cell.tables.push(frame.table);
                }
            }
            None if self.include_tables => self.document.add_table(frame.table),
            None => {}
        }
    }

    fn finish(self) -> Document {
        self.document
    }
}

/// Containers whose content duplicates or sits outside the text flow.
fn is_skipped_container(name: &[u8]) -> bool {
    matches!(name, b"w:txbxContent" | b"mc:Fallback")
}

/// Walk the main document part and append its content to `document`.
///
/// In lenient mode malformed XML ends the walk and everything completed so
/// far is kept; in strict mode it is an error.
pub(crate) fn walk_body(
    xml: &str,
    styles: &StyleSheet,
    document: Document,
    options: &ParseOptions,
) -> Result<Document> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut walker = BodyWalker::new(styles, document, options.include_tables);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => walker.start(&e),
            Ok(Event::Empty(e)) => walker.empty(&e),
            Ok(Event::Text(e)) => match e.unescape() {
                Ok(text) => walker.text(&text),
                Err(err) if options.error_mode == ErrorMode::Strict => return Err(err.into()),
                Err(err) => log::warn!("Skipping undecodable text: {}", err),
            },
            Ok(Event::End(e)) => walker.end(e.name().as_ref()),
            Ok(Event::Eof) => break,
            Err(err) => {
                if options.error_mode == ErrorMode::Strict {
                    return Err(err.into());
                }
                log::warn!(
                    "Malformed document.xml at byte {}: {}; keeping content read so far",
                    reader.buffer_position(),
                    err
                );
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(walker.finish())
}
