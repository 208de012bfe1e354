//! Section heading classification.

use super::catalog::SectionCatalog;
use super::text::{is_all_upper, title_case};
use crate::error::{Error, Result};
use crate::model::{Paragraph, Section};
use regex::{Regex, RegexBuilder};

/// Which signal a heading rule looks at.
#[derive(Debug, Clone)]
pub enum HeadingRule {
    /// Style name contains "heading"; the trimmed text is canonicalized as-is
    StyleName,
    /// Short all-caps line; its title-cased form is canonicalized
    ShortAllCaps {
        /// Maximum length in characters
        max_len: usize,
    },
    /// Any whole-line pattern matches; the title-cased text is canonicalized
    Patterns(Vec<Regex>),
}

impl HeadingRule {
    /// Rule name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            HeadingRule::StyleName => "style",
            HeadingRule::ShortAllCaps { .. } => "all-caps",
            HeadingRule::Patterns(_) => "pattern",
        }
    }

    /// Apply the rule, returning the text to canonicalize on a match.
    fn candidate(&self, text: &str, style_name: &str) -> Option<String> {
        match self {
            HeadingRule::StyleName => style_name
                .to_lowercase()
                .contains("heading")
                .then(|| text.to_string()),
            HeadingRule::ShortAllCaps { max_len } => {
                let fits = !text.is_empty() && text.chars().count() <= *max_len;
                (fits && is_all_upper(text)).then(|| title_case(text))
            }
            HeadingRule::Patterns(patterns) => patterns
                .iter()
                .any(|re| re.is_match(text))
                .then(|| title_case(text)),
        }
    }
}

/// Decides whether a paragraph is a section heading and which section it opens.
///
/// Rules are evaluated in order and the first match wins.
#[derive(Debug, Clone)]
pub struct HeadingClassifier {
    catalog: SectionCatalog,
    rules: Vec<HeadingRule>,
}

impl HeadingClassifier {
    /// Build the standard rule cascade for a catalog.
    pub fn new(catalog: &SectionCatalog) -> Result<Self> {
        let patterns = compile_patterns(&catalog.heading_patterns)?;
        Ok(Self {
            catalog: catalog.clone(),
            rules: vec![
                HeadingRule::StyleName,
                HeadingRule::ShortAllCaps {
                    max_len: catalog.caps_heading_max_len,
                },
                HeadingRule::Patterns(patterns),
            ],
        })
    }

    /// Replace the rule cascade.
    pub fn with_rules(mut self, rules: Vec<HeadingRule>) -> Self {
        self.rules = rules;
        self
    }

    /// The rule cascade in evaluation order.
    pub fn rules(&self) -> &[HeadingRule] {
        &self.rules
    }

    /// The catalog used for canonicalization.
    pub fn catalog(&self) -> &SectionCatalog {
        &self.catalog
    }

    /// Classify a paragraph.
    pub fn classify(&self, paragraph: &Paragraph) -> Option<Section> {
        self.classify_text(&paragraph.plain_text(), paragraph.style_name())
    }

    /// Classify raw text with its style name.
    pub fn classify_text(&self, text: &str, style_name: &str) -> Option<Section> {
        let text = text.trim();
        self.rules.iter().find_map(|rule| {
            rule.candidate(text, style_name).map(|candidate| {
                let section = self.catalog.canonicalize(&candidate);
                log::debug!("Heading ({}): {:?} -> {}", rule.name(), text, section);
                section
            })
        })
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| Error::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> HeadingClassifier {
        HeadingClassifier::new(&SectionCatalog::classic()).unwrap()
    }

    #[test]
    fn test_all_caps_heading() {
        let c = classic();
        assert_eq!(c.classify_text("EXPERIENCE", ""), Some(Section::new("Experience")));
        assert_eq!(c.classify_text("  HOBBIES ", ""), Some(Section::new("Hobbies")));
    }

    #[test]
    fn test_pattern_heading_with_colon() {
        let c = classic();
        assert_eq!(c.classify_text("Work Experience:", ""), Some(Section::new("Experience")));
        assert_eq!(c.classify_text("education", ""), Some(Section::new("Education")));
        assert_eq!(c.classify_text("Core Competency :", ""), Some(Section::new("Core Competencies")));
    }

    #[test]
    fn test_not_a_heading() {
        let c = classic();
        assert_eq!(c.classify_text("Random Paragraph About Cats", ""), None);
        assert_eq!(c.classify_text("", "Normal"), None);
        assert_eq!(c.classify_text("Skills and experience with Rust", ""), None);
    }

    #[test]
    fn test_style_heading_wins() {
        let c = classic();
        let p = Paragraph::with_text("Selected Projects").styled("Heading 2");
        assert_eq!(c.classify(&p), Some(Section::new("Selected Projects")));

        let empty = Paragraph::new().styled("heading 1");
        assert_eq!(c.classify(&empty), Some(Section::uncategorized()));
    }

    #[test]
    fn test_long_caps_line_is_not_heading() {
        let c = classic();
        let long = "A".repeat(61);
        assert_eq!(c.classify_text(&long, ""), None);
        assert!(c.classify_text(&"A".repeat(60), "").is_some());
    }

    #[test]
    fn test_rule_order() {
        let c = classic();
        let names: Vec<&str> = c.rules().iter().map(HeadingRule::name).collect();
        assert_eq!(names, vec!["style", "all-caps", "pattern"]);

        let style_only = classic().with_rules(vec![HeadingRule::StyleName]);
        assert_eq!(style_only.classify_text("EXPERIENCE", ""), None);
    }

    #[test]
    fn test_invalid_pattern() {
        let catalog = SectionCatalog::classic().with_heading_pattern("(unclosed");
        let err = HeadingClassifier::new(&catalog).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }
}
