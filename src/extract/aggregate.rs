//! Corpus aggregation.

use super::dedup::dedup_collation;
use super::document::{file_name, DocumentExtraction, DocumentExtractor};
use super::options::ExtractOptions;
use super::stats::CollateStats;
use crate::error::{Error, Result};
use crate::model::{Bullet, Collation, Document, Report};
use std::path::Path;

/// Outcome of one document during aggregation, for progress reporting.
#[derive(Debug)]
pub enum DocumentOutcome<'a> {
    /// The document was read and merged
    Merged {
        /// Source file name
        source: &'a str,
        /// Bullets it contributed before corpus-level filtering
        bullets: usize,
    },
    /// The document could not be read and was skipped
    Skipped {
        /// Source file name
        source: &'a str,
        /// Why it was skipped
        error: &'a Error,
    },
}

/// Running state of an aggregation, threaded through the document fold.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    collation: Collation,
    sources: Vec<String>,
    stats: CollateStats,
}

impl Accumulator {
    /// Bullets merged so far.
    pub fn bullet_count(&self) -> usize {
        self.collation.bullet_count()
    }

    /// Statistics so far.
    pub fn stats(&self) -> &CollateStats {
        &self.stats
    }
}

/// Merges per-document extractions into one filtered, deduplicated report.
#[derive(Debug, Clone)]
pub struct CorpusAggregator {
    extractor: DocumentExtractor,
}

impl CorpusAggregator {
    /// Create an aggregator; fails only when a heading pattern does not compile.
    pub fn new(options: ExtractOptions) -> Result<Self> {
        Ok(Self {
            extractor: DocumentExtractor::new(options)?,
        })
    }

    /// The per-document extractor.
    pub fn extractor(&self) -> &DocumentExtractor {
        &self.extractor
    }

    fn options(&self) -> &ExtractOptions {
        self.extractor.options()
    }

    /// Aggregate documents on disk in the given order.
    pub fn aggregate<P: AsRef<Path>>(&self, paths: &[P]) -> Report {
        self.aggregate_with_progress(paths, |_| {})
    }

    /// Aggregate documents on disk, reporting each document's outcome.
    ///
    /// A document that cannot be read is logged, reported and skipped.
    pub fn aggregate_with_progress<P, F>(&self, paths: &[P], mut on_document: F) -> Report
    where
        P: AsRef<Path>,
        F: FnMut(DocumentOutcome<'_>),
    {
        let mut acc = Accumulator::default();
        acc.stats.documents_found = paths.len() as u32;

        let acc = paths.iter().fold(acc, |acc, path| {
            let path = path.as_ref();
            let source = file_name(path);
            match self.extractor.extract_path(path) {
                Ok(extraction) => {
                    let bullets = extraction.collation.bullet_count();
                    let acc = self.merge(acc, extraction, &source);
                    on_document(DocumentOutcome::Merged {
                        source: &source,
                        bullets,
                    });
                    acc
                }
                Err(error) => {
                    log::warn!("Skipping '{}' due to read error: {}", source, error);
                    on_document(DocumentOutcome::Skipped {
                        source: &source,
                        error: &error,
                    });
                    let mut acc = acc;
                    acc.stats.documents_skipped += 1;
                    acc
                }
            }
        });

        self.finish(acc)
    }

    /// Aggregate already-parsed documents in the given order.
    pub fn aggregate_documents<'d>(&self, documents: impl IntoIterator<Item = &'d Document>) -> Report {
        let acc = documents
            .into_iter()
            .enumerate()
            .fold(Accumulator::default(), |mut acc, (index, document)| {
                acc.stats.documents_found += 1;
                let source = document
                    .metadata
                    .source
                    .clone()
                    .unwrap_or_else(|| format!("document {}", index + 1));
                let extraction = self.extractor.extract(document);
                self.merge(acc, extraction, &source)
            });
        self.finish(acc)
    }

    /// Fold one extraction into the accumulator.
    ///
    /// Section names are canonicalized again and sections outside the
    /// allow-list are dropped; experience families are always kept.
    pub fn merge(&self, mut acc: Accumulator, extraction: DocumentExtraction, source: &str) -> Accumulator {
        let catalog = &self.options().catalog;
        let tag = |bullet: Bullet| {
            if self.options().track_provenance {
                bullet.with_source(source)
            } else {
                bullet
            }
        };

        acc.stats.merge(&extraction.stats);
        acc.stats.documents_read += 1;
        acc.sources.push(source.to_string());

        for (family, roles) in extraction.collation.experience {
            for (role, bullets) in roles {
                for bullet in bullets {
                    acc.collation.push_role_bullet(&family, &role, tag(bullet));
                }
            }
        }

        for (section, bullets) in extraction.collation.sections {
            let canonical = catalog.canonicalize(section.as_str());
            if !catalog.is_allowed(&canonical) {
                log::debug!(
                    "Dropping section '{}' from {} ({} bullets)",
                    canonical,
                    source,
                    bullets.len()
                );
                acc.stats.add_filtered(bullets.len());
                continue;
            }
            for bullet in bullets {
                acc.collation.push_section_bullet(&canonical, tag(bullet));
            }
        }

        acc
    }

    /// Final global deduplication and pruning.
    pub fn finish(&self, mut acc: Accumulator) -> Report {
        let options = self.options();
        if options.deduplicate {
            let removed = dedup_collation(&mut acc.collation);
            acc.stats.add_duplicates(removed);
        }
        acc.collation.prune_empty();

        log::info!(
            "Collated {} bullets in {} roles from {} of {} documents",
            acc.collation.bullet_count(),
            acc.collation.role_count(),
            acc.stats.documents_read,
            acc.stats.documents_found
        );

        Report {
            collation: acc.collation,
            experience_order: options.catalog.experience_order(),
            section_order: options.catalog.section_order(),
            sources: acc.sources,
            stats: acc.stats,
        }
    }
}
