//! DOCX parsing module.
//!
//! Produces the [`Document`](crate::model::Document) model: body paragraphs with
//! style names and run-level bold flags, plus tables in document order.

mod body;
mod docx_parser;
mod options;
mod styles;

pub use docx_parser::DocxParser;
pub use options::{ErrorMode, ParseOptions};
pub use styles::StyleSheet;
