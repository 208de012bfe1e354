//! Rendering module for writing collated reports in various output formats.

mod docx;
mod json;
pub mod layout;
mod markdown;
mod options;
pub mod package;
mod xlsx;

pub use docx::{document_xml, to_docx};
pub use json::to_json;
pub use layout::{outline, sheets, OutlineBlock, Sheet};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{JsonFormat, RenderOptions, DEFAULT_TITLE, MAX_SHEET_NAME_LEN};
pub use xlsx::{column_letters, to_xlsx, worksheet_xml};
