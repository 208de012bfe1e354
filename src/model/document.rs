//! Document-level types.

use super::{Paragraph, Table};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parsed word-processing document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (source name, title, author, etc.)
    pub metadata: Metadata,

    /// Body paragraphs in document order
    pub paragraphs: Vec<Paragraph>,

    /// Top-level tables in document order
    pub tables: Vec<Table>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document that remembers where it came from.
    pub fn named(source: impl Into<String>) -> Self {
        Self {
            metadata: Metadata {
                source: Some(source.into()),
                ..Default::default()
            },
            ..Self::default()
        }
    }

    /// Add a body paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a top-level table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// The linear paragraph stream: body paragraphs first, then every table's
    /// cells in row-major order.
    pub fn paragraph_stream(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs
            .iter()
            .chain(self.tables.iter().flat_map(|t| t.paragraphs()))
    }

    /// Total number of paragraphs in the stream.
    pub fn paragraph_count(&self) -> usize {
        self.paragraph_stream().count()
    }

    /// Check if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.paragraph_stream()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Identifier of the source file (its file name)
    pub source: Option<String>,

    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}
