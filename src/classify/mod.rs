//! Line classification: headings, role headers and bullets.
//!
//! Each detector is a small ordered rule list. [`Classifier`] bundles the three
//! for one [`SectionCatalog`] so the segmenter can ask a single object.

mod bullet;
mod catalog;
mod heading;
mod role;
pub mod text;

pub use bullet::BulletDetector;
pub use catalog::{heading_line, SectionCatalog, SectionProfile, Synonym};
pub use heading::{HeadingClassifier, HeadingRule};
pub use role::{RoleHeaderDetector, RoleHeuristic};
pub use text::{bullet_key, clean, title_case};

use crate::error::Result;
use crate::model::{Paragraph, Section};

/// The three detectors configured for one catalog.
#[derive(Debug, Clone)]
pub struct Classifier {
    /// Section heading classifier
    pub headings: HeadingClassifier,
    /// Role header detector
    pub roles: RoleHeaderDetector,
    /// Bullet-line detector
    pub bullets: BulletDetector,
}

impl Classifier {
    /// Build the detectors for a catalog.
    pub fn new(catalog: &SectionCatalog) -> Result<Self> {
        Ok(Self {
            headings: HeadingClassifier::new(catalog)?,
            roles: RoleHeaderDetector::new(),
            bullets: BulletDetector::new(),
        })
    }

    /// The catalog the heading classifier canonicalizes against.
    pub fn catalog(&self) -> &SectionCatalog {
        self.headings.catalog()
    }

    /// Section opened by this paragraph, if it is a heading.
    pub fn heading(&self, paragraph: &Paragraph) -> Option<Section> {
        self.headings.classify(paragraph)
    }

    /// True if the paragraph is a bullet line.
    pub fn is_bullet(&self, paragraph: &Paragraph) -> bool {
        self.bullets.is_bullet(paragraph)
    }

    /// True if the paragraph opens a role: a heuristic accepts it and it is not a bullet.
    pub fn is_role_header(&self, paragraph: &Paragraph) -> bool {
        !self.is_bullet(paragraph)
            && self
                .roles
                .is_role_header(&paragraph.plain_text(), paragraph.is_bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_shape_beats_role_header() {
        let c = Classifier::new(&SectionCatalog::classic()).unwrap();
        let bold_bullet = Paragraph::bold("• Senior Engineer - Acme");
        assert!(c.is_bullet(&bold_bullet));
        assert!(!c.is_role_header(&bold_bullet));

        let header = Paragraph::with_text("Senior Engineer - Acme");
        assert!(c.is_role_header(&header));
    }
}
