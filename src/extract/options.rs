//! Extraction options.

use crate::classify::{SectionCatalog, SectionProfile};
use crate::parser::ParseOptions;

/// Options controlling extraction and aggregation.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Sections, synonyms and heading patterns
    pub catalog: SectionCatalog,

    /// Remove duplicate bullets (case-insensitive, first occurrence wins)
    pub deduplicate: bool,

    /// Tag each bullet with the file name it came from
    pub track_provenance: bool,

    /// Options passed to the document parser
    pub parse: ParseOptions,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a built-in section profile.
    pub fn with_profile(mut self, profile: SectionProfile) -> Self {
        self.catalog = SectionCatalog::for_profile(profile);
        self
    }

    /// Use a custom section catalog.
    pub fn with_catalog(mut self, catalog: SectionCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Enable or disable deduplication.
    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    /// Enable or disable source file tagging.
    pub fn with_provenance(mut self, track: bool) -> Self {
        self.track_provenance = track;
        self
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            catalog: SectionCatalog::classic(),
            deduplicate: true,
            track_provenance: true,
            parse: ParseOptions::default(),
        }
    }
}
