//! Per-document extraction.

use super::dedup::dedup_collation;
use super::options::ExtractOptions;
use super::segmenter::Segmenter;
use super::stats::CollateStats;
use crate::classify::Classifier;
use crate::error::{Error, Result};
use crate::model::{Collation, Document, Metadata};
use crate::parser::DocxParser;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Buckets extracted from one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentExtraction {
    /// Source file name
    pub source: Option<String>,

    /// Core properties of the document (title, author, dates)
    pub metadata: Metadata,

    /// Role and section buckets, deduplicated when enabled
    pub collation: Collation,

    /// Walk statistics
    pub stats: CollateStats,
}

/// Runs the segmenter over a document's full paragraph stream.
#[derive(Debug, Clone)]
pub struct DocumentExtractor {
    classifier: Classifier,
    options: ExtractOptions,
}

impl DocumentExtractor {
    /// Build an extractor; fails only when a heading pattern does not compile.
    pub fn new(options: ExtractOptions) -> Result<Self> {
        Ok(Self {
            classifier: Classifier::new(&options.catalog)?,
            options,
        })
    }

    /// The classifier in use.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// The options in use.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract role and section buckets from a parsed document.
    ///
    /// Never fails: a document without headings, roles or bullets just yields
    /// smaller buckets. Roles left without bullets are dropped.
    pub fn extract(&self, document: &Document) -> DocumentExtraction {
        let mut segmenter = Segmenter::new(&self.classifier);
        for paragraph in document.paragraph_stream() {
            segmenter.feed(paragraph);
        }
        let (mut collation, mut stats) = segmenter.finish();

        if self.options.deduplicate {
            stats.add_duplicates(dedup_collation(&mut collation));
        }
        collation.prune_empty();

        log::debug!(
            "Extracted {}: {} roles, {} bullets ({} duplicates)",
            document.metadata.source.as_deref().unwrap_or("<memory>"),
            collation.role_count(),
            collation.bullet_count(),
            stats.duplicate_count
        );

        DocumentExtraction {
            source: document.metadata.source.clone(),
            metadata: document.metadata.clone(),
            collation,
            stats,
        }
    }

    /// Open, parse and extract one file.
    ///
    /// Any read or parse failure comes back as [`Error::DocumentRead`] naming the file.
    pub fn extract_path<P: AsRef<Path>>(&self, path: P) -> Result<DocumentExtraction> {
        let path = path.as_ref();
        let name = file_name(path);
        let document = DocxParser::open_with_options(path, self.options.parse.clone())
            .and_then(|parser| parser.parse())
            .map_err(|e| Error::document_read(name, e))?;
        Ok(self.extract(&document))
    }
}

/// File name of a path, used as the provenance identifier.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Section, Table, TableRow, UNKNOWN_ROLE};

    fn extractor() -> DocumentExtractor {
        DocumentExtractor::new(ExtractOptions::default()).unwrap()
    }

    #[test]
    fn test_role_with_duplicate_bullets() {
        let mut doc = Document::named("a.docx");
        doc.add_paragraph(Paragraph::with_text("Experience").styled("Heading 1"));
        doc.add_paragraph(Paragraph::bold("Backend Engineer — Acme — Jan 2020 – Present"));
        doc.add_paragraph(Paragraph::with_text("• Built API"));
        doc.add_paragraph(Paragraph::with_text("• Built API"));

        let result = extractor().extract(&doc);
        let exp = Section::new("Experience");
        let roles = result.collation.roles(&exp).unwrap();
        assert_eq!(roles.len(), 1);
        let bullets = &roles["Backend Engineer — Acme — Jan 2020 – Present"];
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].text, "Built API");
        assert_eq!(result.stats.duplicate_count, 1);
        assert_eq!(result.source.as_deref(), Some("a.docx"));
    }

    #[test]
    fn test_metadata_carried_over() {
        let mut doc = Document::named("cv.docx");
        doc.metadata.title = Some("Resume".to_string());
        doc.metadata.author = Some("Jane Doe".to_string());

        let result = extractor().extract(&doc);
        assert_eq!(result.metadata.title.as_deref(), Some("Resume"));
        assert_eq!(result.metadata.author.as_deref(), Some("Jane Doe"));
        assert_eq!(result.metadata.source.as_deref(), Some("cv.docx"));
    }

    #[test]
    fn test_dedup_disabled_keeps_duplicates() {
        let extractor =
            DocumentExtractor::new(ExtractOptions::new().with_deduplicate(false)).unwrap();
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("SKILLS"));
        doc.add_paragraph(Paragraph::with_text("- Rust"));
        doc.add_paragraph(Paragraph::with_text("- rust"));

        let result = extractor.extract(&doc);
        assert_eq!(result.collation.section(&Section::new("Skills")).unwrap().len(), 2);
    }

    #[test]
    fn test_table_content_follows_body() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Experience"));
        doc.add_paragraph(Paragraph::with_text("• Body bullet"));

        let mut table = Table::new();
        table.add_row(TableRow::from_strings(["Skills", "• Rust"]));
        doc.add_table(table);

        let result = extractor().extract(&doc);
        let exp = Section::new("Experience");
        assert_eq!(result.collation.role(&exp, UNKNOWN_ROLE).unwrap().len(), 1);
        assert_eq!(result.collation.section(&Section::new("Skills")).unwrap()[0].text, "Rust");
    }

    #[test]
    fn test_empty_roles_dropped() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Experience"));
        doc.add_paragraph(Paragraph::bold("Intern"));

        let result = extractor().extract(&doc);
        assert!(result.collation.is_empty());
        assert_eq!(result.collation.role_count(), 0);
        assert_eq!(result.stats.role_header_count, 1);
    }

    #[test]
    fn test_extract_path_missing_file() {
        let err = extractor().extract_path("/nonexistent/cv.docx").unwrap_err();
        match err {
            Error::DocumentRead { path, .. } => assert_eq!(path, "cv.docx"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
