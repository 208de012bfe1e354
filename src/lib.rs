//! # resume-collate
//!
//! Collate bullet points from a folder of resumes (`.docx`) into one
//! role-separated report.
//!
//! Every document is walked paragraph by paragraph (table cells included).
//! Section headings are recognised and canonicalised, role headers inside
//! experience-like sections open role buckets, and bullet lines are cleaned and
//! routed to the active role or section. Results are merged across the corpus,
//! filtered to an allow-list of sections and deduplicated case-insensitively,
//! first occurrence wins.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resume_collate::Collator;
//!
//! fn main() -> resume_collate::Result<()> {
//!     let result = Collator::new().run("resumes/", "out/bullets.docx")?;
//!     println!("{} bullets", result.report().collation.bullet_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two section profiles**: classic and extended allow-lists, synonyms and heading patterns
//! - **Role-separated experience**: bullets grouped under the role header they follow
//! - **Provenance**: every bullet can carry the file name it came from
//! - **Four outputs**: DOCX, XLSX, Markdown and JSON

pub mod classify;
pub mod detect;
pub mod emit;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use classify::{SectionCatalog, SectionProfile};
pub use detect::{has_docx_extension, is_docx};
pub use emit::{EmitterRegistry, ReportEmitter};
pub use error::{Error, Result};
pub use extract::{
    collect_docx_files, CollateStats, CorpusAggregator, DocumentExtraction, DocumentExtractor,
    DocumentOutcome, ExtractOptions,
};
pub use model::{
    Bullet, Collation, Document, Metadata, Paragraph, Report, Section, Table, TableCell, TableRow,
    UNKNOWN_ROLE,
};
pub use parser::{DocxParser, ErrorMode, ParseOptions};
pub use render::{JsonFormat, RenderOptions};

use std::path::{Path, PathBuf};

/// Parse a DOCX file into the document model.
///
/// # Example
///
/// ```no_run
/// use resume_collate::parse_file;
///
/// let doc = parse_file("resume.docx").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a DOCX from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Extract role and section buckets from one resume with the classic profile.
///
/// # Example
///
/// ```no_run
/// use resume_collate::extract_file;
///
/// let extraction = extract_file("resume.docx").unwrap();
/// for (family, roles) in &extraction.collation.experience {
///     println!("{}: {} roles", family, roles.len());
/// }
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<DocumentExtraction> {
    extract_file_with_options(path, ExtractOptions::default())
}

/// Extract one resume with custom options.
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<DocumentExtraction> {
    DocumentExtractor::new(options)?.extract_path(path)
}

/// Collate every `.docx` under `input` and write the report to `output`.
///
/// The output format follows the extension of `output`.
pub fn collate_dir<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<Report> {
    Collator::new()
        .run(input, output)
        .map(CollateResult::into_report)
}

/// Builder for a collation run.
///
/// # Example
///
/// ```no_run
/// use resume_collate::{Collator, SectionProfile};
///
/// let result = Collator::new()
///     .with_profile(SectionProfile::Extended)
///     .with_provenance(false)
///     .collate("resumes/")?;
/// let markdown = result.to_markdown();
/// # Ok::<(), resume_collate::Error>(())
/// ```
pub struct Collator {
    extract_options: ExtractOptions,
    render_options: RenderOptions,
    registry: EmitterRegistry,
}

impl Collator {
    /// Create a new collator with the classic profile.
    pub fn new() -> Self {
        Self {
            extract_options: ExtractOptions::default(),
            render_options: RenderOptions::default(),
            registry: EmitterRegistry::with_defaults(),
        }
    }

    /// Use a built-in section profile.
    pub fn with_profile(mut self, profile: SectionProfile) -> Self {
        self.extract_options = self.extract_options.with_profile(profile);
        self
    }

    /// Use a custom section catalog.
    pub fn with_catalog(mut self, catalog: SectionCatalog) -> Self {
        self.extract_options = self.extract_options.with_catalog(catalog);
        self
    }

    /// Enable or disable deduplication.
    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.extract_options = self.extract_options.with_deduplicate(deduplicate);
        self
    }

    /// Enable or disable source file tagging.
    pub fn with_provenance(mut self, track: bool) -> Self {
        self.extract_options = self.extract_options.with_provenance(track);
        self
    }

    /// Fail a document on the first malformed XML part.
    pub fn strict(mut self) -> Self {
        self.extract_options.parse = self.extract_options.parse.clone().strict();
        self
    }

    /// Keep whatever parsed before a malformed XML part.
    pub fn lenient(mut self) -> Self {
        self.extract_options.parse = self.extract_options.parse.clone().lenient();
        self
    }

    /// Set the document-style title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Set all render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Register an additional output emitter.
    pub fn with_emitter(mut self, emitter: std::sync::Arc<dyn ReportEmitter>) -> Self {
        self.registry.register(emitter);
        self
    }

    /// Extraction options in use.
    pub fn extract_options(&self) -> &ExtractOptions {
        &self.extract_options
    }

    /// Emitters in use.
    pub fn registry(&self) -> &EmitterRegistry {
        &self.registry
    }

    /// Find the documents to collate.
    ///
    /// Fails with [`Error::InputNotFound`] for a missing folder and
    /// [`Error::NoDocuments`] when nothing matches.
    pub fn discover<P: AsRef<Path>>(&self, input: P) -> Result<Vec<PathBuf>> {
        let input = input.as_ref();
        let files = collect_docx_files(input)?;
        if files.is_empty() {
            return Err(Error::NoDocuments(input.to_path_buf()));
        }
        Ok(files)
    }

    /// Collate every document under `input` without writing anything.
    pub fn collate<P: AsRef<Path>>(&self, input: P) -> Result<CollateResult> {
        let files = self.discover(input)?;
        self.collate_paths(&files, |_| {})
    }

    /// Collate the given documents, reporting each document's outcome.
    pub fn collate_paths<P, F>(&self, paths: &[P], on_document: F) -> Result<CollateResult>
    where
        P: AsRef<Path>,
        F: FnMut(DocumentOutcome<'_>),
    {
        let aggregator = CorpusAggregator::new(self.extract_options.clone())?;
        let report = aggregator.aggregate_with_progress(paths, on_document);
        Ok(CollateResult {
            report,
            render_options: self.render_options.clone(),
        })
    }

    /// Full run: validate the output path, collate `input`, write the report.
    ///
    /// Configuration problems are reported before any document is read. An
    /// empty result writes nothing and returns [`Error::EmptyResult`].
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<CollateResult> {
        self.run_with_progress(input, output, |_| {}, |_| {})
    }

    /// Full run with progress callbacks: `on_start` receives the document count.
    pub fn run_with_progress<P, Q, S, F>(
        &self,
        input: P,
        output: Q,
        on_start: S,
        on_document: F,
    ) -> Result<CollateResult>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        S: FnOnce(usize),
        F: FnMut(DocumentOutcome<'_>),
    {
        let input = input.as_ref();
        let output = output.as_ref();

        if !input.is_dir() {
            return Err(Error::InputNotFound(input.to_path_buf()));
        }
        // Compile patterns before touching any document.
        CorpusAggregator::new(self.extract_options.clone())?;
        self.registry.validate_output(output)?;

        let files = self.discover(input)?;
        on_start(files.len());

        let result = self.collate_paths(&files, on_document)?;
        self.registry
            .emit(&result.report, output, &result.render_options)?;
        Ok(result)
    }
}

impl Default for Collator {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a collation run.
pub struct CollateResult {
    /// The aggregated report
    pub report: Report,
    /// Render options to use
    render_options: RenderOptions,
}

impl CollateResult {
    /// The report.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Run statistics.
    pub fn stats(&self) -> &CollateStats {
        &self.report.stats
    }

    /// True when no bullet survived.
    pub fn is_empty(&self) -> bool {
        self.report.is_empty()
    }

    /// Take the report.
    pub fn into_report(self) -> Report {
        self.report
    }

    /// Render as `.docx` bytes.
    pub fn to_docx(&self) -> Result<Vec<u8>> {
        render::to_docx(&self.report, &self.render_options)
    }

    /// Render as `.xlsx` bytes.
    pub fn to_xlsx(&self) -> Result<Vec<u8>> {
        render::to_xlsx(&self.report, &self.render_options)
    }

    /// Render as Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.report, &self.render_options)
    }

    /// Render as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.report, format)
    }

    /// Write the report to a file; the format follows the extension.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let registry = EmitterRegistry::with_defaults();
        registry.validate_output(path)?;
        registry.emit(&self.report, path, &self.render_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collator_builder() {
        let collator = Collator::new()
            .with_profile(SectionProfile::Extended)
            .with_deduplicate(false)
            .with_provenance(false)
            .strict()
            .with_title("Bullets");

        let options = collator.extract_options();
        assert_eq!(options.catalog, SectionCatalog::extended());
        assert!(!options.deduplicate);
        assert!(!options.track_provenance);
        assert_eq!(options.parse.error_mode, ErrorMode::Strict);
        assert_eq!(collator.render_options.title, "Bullets");
    }

    #[test]
    fn test_parse_bytes_rejects_non_zip() {
        assert!(matches!(parse_bytes(b"plain text"), Err(Error::NotDocx)));
        assert!(parse_bytes(&[]).is_err());
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = Collator::new()
            .run(dir.path().join("nope"), dir.path().join("out.docx"))
            .err()
            .unwrap();
        assert!(matches!(err, Error::InputNotFound(_)));
        assert!(!dir.path().join("out.docx").exists());
    }

    #[test]
    fn test_run_no_documents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        let err = Collator::new()
            .run(dir.path(), dir.path().join("out.xlsx"))
            .err()
            .unwrap();
        assert!(matches!(err, Error::NoDocuments(_)));
    }

    #[test]
    fn test_run_bad_output_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.docx"), b"not a zip").unwrap();

        let mut touched = false;
        let err = Collator::new()
            .run_with_progress(dir.path(), dir.path().join("out.pdf"), |_| touched = true, |_| {})
            .err()
            .unwrap();
        assert!(err.is_configuration());
        assert!(!touched);
    }
}
