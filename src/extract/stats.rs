//! Collation statistics.

use serde::{Deserialize, Serialize};

/// Statistics collected while extracting and aggregating documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateStats {
    /// Documents found under the input folder
    pub documents_found: u32,

    /// Documents read and extracted
    pub documents_read: u32,

    /// Documents skipped after a read failure
    pub documents_skipped: u32,

    /// Paragraphs walked by the segmenter
    pub paragraph_count: u32,

    /// Section headings recognized
    pub heading_count: u32,

    /// Role headers recognized
    pub role_header_count: u32,

    /// Bullets extracted before deduplication
    pub bullet_count: u32,

    /// Bullets removed as duplicates
    pub duplicate_count: u32,

    /// Bullets dropped because their section is not allowed
    pub filtered_count: u32,
}

impl CollateStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment role header count.
    pub fn add_role_header(&mut self) {
        self.role_header_count += 1;
    }

    /// Increment bullet count.
    pub fn add_bullet(&mut self) {
        self.bullet_count += 1;
    }

    /// Record removed duplicates.
    pub fn add_duplicates(&mut self, count: usize) {
        self.duplicate_count += count as u32;
    }

    /// Record bullets dropped by the allow-list.
    pub fn add_filtered(&mut self, count: usize) {
        self.filtered_count += count as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &CollateStats) {
        self.documents_found += other.documents_found;
        self.documents_read += other.documents_read;
        self.documents_skipped += other.documents_skipped;
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.role_header_count += other.role_header_count;
        self.bullet_count += other.bullet_count;
        self.duplicate_count += other.duplicate_count;
        self.filtered_count += other.filtered_count;
    }
}
