//! Document and report model types.
//!
//! The document side mirrors what the reader produces (paragraphs with a style
//! name and run-level bold flags, plus nested tables). The report side holds the
//! sections, roles and bullets derived from it.

mod document;
mod paragraph;
mod report;
mod table;

pub use document::{Document, Metadata};
pub use paragraph::{InlineContent, Paragraph, ParagraphStyle, TextRun, TextStyle};
pub use report::{Bullet, Collation, Report, RoleMap, Section, UNKNOWN_ROLE};
pub use table::{Table, TableCell, TableRow};
