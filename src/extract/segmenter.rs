//! Section/role segmentation state machine.

use super::stats::CollateStats;
use crate::classify::{clean, Classifier};
use crate::model::{Bullet, Collation, Paragraph, Section, UNKNOWN_ROLE};

/// What the segmenter did with one paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A heading switched the current section
    Heading(Section),
    /// A role header opened a role in the current experience section
    RoleHeader(String),
    /// A bullet was appended to a role or section bucket
    Bullet(String),
    /// Nothing was emitted
    Ignored,
}

/// Walks a paragraph stream, tracking the current section and role.
pub struct Segmenter<'a> {
    classifier: &'a Classifier,
    section: Section,
    role: Option<String>,
    collation: Collation,
    stats: CollateStats,
}

impl<'a> Segmenter<'a> {
    /// Start in `Uncategorized` with no role.
    pub fn new(classifier: &'a Classifier) -> Self {
        Self {
            classifier,
            section: Section::uncategorized(),
            role: None,
            collation: Collation::new(),
            stats: CollateStats::new(),
        }
    }

    /// The current section.
    pub fn section(&self) -> &Section {
        &self.section
    }

    /// The current role, if any.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Process one paragraph.
    pub fn feed(&mut self, paragraph: &Paragraph) -> Step {
        self.stats.add_paragraph();

        if let Some(section) = self.classifier.heading(paragraph) {
            self.stats.add_heading();
            self.section = section.clone();
            self.role = None;
            return Step::Heading(section);
        }

        if self.classifier.catalog().is_experience(&self.section) {
            self.feed_experience(paragraph)
        } else {
            self.feed_section(paragraph)
        }
    }

    fn feed_experience(&mut self, paragraph: &Paragraph) -> Step {
        let text = paragraph.plain_text();
        let text = text.trim();
        if text.is_empty() {
            return Step::Ignored;
        }

        if self.classifier.is_role_header(paragraph) {
            self.stats.add_role_header();
            self.collation.open_role(&self.section, text);
            self.role = Some(text.to_string());
            return Step::RoleHeader(text.to_string());
        }

        if !self.classifier.is_bullet(paragraph) {
            return Step::Ignored;
        }
        let bullet = clean(text);
        if bullet.is_empty() {
            return Step::Ignored;
        }

        let role = self.role.get_or_insert_with(|| UNKNOWN_ROLE.to_string());
        self.collation
            .push_role_bullet(&self.section, role, Bullet::new(bullet.clone()));
        self.stats.add_bullet();
        Step::Bullet(bullet)
    }

    fn feed_section(&mut self, paragraph: &Paragraph) -> Step {
        if !self.classifier.is_bullet(paragraph) {
            return Step::Ignored;
        }
        let bullet = clean(&paragraph.plain_text());
        if bullet.is_empty() {
            return Step::Ignored;
        }
        self.collation
            .push_section_bullet(&self.section, Bullet::new(bullet.clone()));
        self.stats.add_bullet();
        Step::Bullet(bullet)
    }

    /// Finish the walk and return the raw buckets with the walk statistics.
    pub fn finish(self) -> (Collation, CollateStats) {
        (self.collation, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SectionCatalog;

    fn classifier() -> Classifier {
        Classifier::new(&SectionCatalog::classic()).unwrap()
    }

    #[test]
    fn test_heading_resets_role() {
        let c = classifier();
        let mut s = Segmenter::new(&c);
        assert!(s.section().is_uncategorized());

        s.feed(&Paragraph::with_text("EXPERIENCE"));
        s.feed(&Paragraph::bold("Backend Engineer"));
        assert_eq!(s.role(), Some("Backend Engineer"));

        assert_eq!(
            s.feed(&Paragraph::with_text("SKILLS")),
            Step::Heading(Section::new("Skills"))
        );
        assert_eq!(s.role(), None);
    }

    #[test]
    fn test_bullet_before_role_goes_to_unknown() {
        let c = classifier();
        let mut s = Segmenter::new(&c);
        s.feed(&Paragraph::with_text("Experience"));
        let step = s.feed(&Paragraph::with_text("• Reduced costs by 20%"));
        assert_eq!(step, Step::Bullet("Reduced costs by 20%".to_string()));

        let (collation, _) = s.finish();
        let exp = Section::new("Experience");
        assert_eq!(collation.role(&exp, UNKNOWN_ROLE).unwrap().len(), 1);
    }

    #[test]
    fn test_description_lines_ignored_in_experience() {
        let c = classifier();
        let mut s = Segmenter::new(&c);
        s.feed(&Paragraph::with_text("Experience"));
        assert_eq!(
            s.feed(&Paragraph::with_text("located in a small town near the coast")),
            Step::Ignored
        );
        assert_eq!(s.feed(&Paragraph::new()), Step::Ignored);
    }

    #[test]
    fn test_non_bullets_ignored_in_sections() {
        let c = classifier();
        let mut s = Segmenter::new(&c);
        assert_eq!(s.feed(&Paragraph::with_text("Jordan Lee")), Step::Ignored);
        assert_eq!(
            s.feed(&Paragraph::with_text("- Rust").styled("Normal")),
            Step::Bullet("Rust".to_string())
        );

        let (collation, stats) = s.finish();
        assert_eq!(collation.section(&Section::uncategorized()).unwrap().len(), 1);
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.bullet_count, 1);
    }

    #[test]
    fn test_empty_heading_styled_paragraph_switches_to_uncategorized() {
        let c = classifier();
        let mut s = Segmenter::new(&c);
        s.feed(&Paragraph::with_text("Skills"));
        assert_eq!(
            s.feed(&Paragraph::new().styled("Heading 1")),
            Step::Heading(Section::uncategorized())
        );
    }

    #[test]
    fn test_consecutive_role_headers_leave_empty_bucket() {
        let c = classifier();
        let mut s = Segmenter::new(&c);
        s.feed(&Paragraph::with_text("Experience"));
        s.feed(&Paragraph::with_text("Staff Engineer | Initech"));
        s.feed(&Paragraph::with_text("Senior Engineer | Initrode"));
        s.feed(&Paragraph::with_text("* Led migration"));

        let (collation, stats) = s.finish();
        let exp = Section::new("Experience");
        assert_eq!(stats.role_header_count, 2);
        assert!(collation.role(&exp, "Staff Engineer | Initech").unwrap().is_empty());
        assert_eq!(collation.role(&exp, "Senior Engineer | Initrode").unwrap().len(), 1);
    }
}
