//! Section catalog: the allow-list, synonym table and heading patterns.

use super::text::title_case;
use crate::error::{Error, Result};
use crate::model::Section;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in section profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionProfile {
    /// Experience, Core Competencies, Skills, Education, Certifications, Summary
    #[default]
    Classic,
    /// Classic plus Professional Profile, Technical Skills, Professional
    /// Experience and Additional Skills & Qualifications
    Extended,
}

impl SectionProfile {
    /// All built-in profiles.
    pub const ALL: [SectionProfile; 2] = [SectionProfile::Classic, SectionProfile::Extended];

    /// Profile name as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            SectionProfile::Classic => "classic",
            SectionProfile::Extended => "extended",
        }
    }
}

impl fmt::Display for SectionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SectionProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(SectionProfile::Classic),
            "extended" => Ok(SectionProfile::Extended),
            other => Err(Error::Other(format!("Unknown section profile: {}", other))),
        }
    }
}

/// A synonym entry mapping an alternative heading to a canonical section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synonym {
    /// Alternative heading text
    pub alias: String,
    /// Canonical section name
    pub section: String,
}

/// Everything that decides which sections exist and how headings map onto them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCatalog {
    /// Canonical sections that survive aggregation (`Uncategorized` always does)
    pub sections: Vec<String>,

    /// Alternative heading names, looked up case-insensitively
    #[serde(default)]
    pub synonyms: Vec<Synonym>,

    /// Whole-line heading patterns, matched case-insensitively in order
    #[serde(default)]
    pub heading_patterns: Vec<String>,

    /// Sections whose content is grouped by role
    #[serde(default)]
    pub experience_sections: Vec<String>,

    /// Preferred emission order of the other sections
    #[serde(default)]
    pub order: Vec<String>,

    /// Maximum length of an all-caps line that counts as a heading
    #[serde(default = "default_caps_max_len")]
    pub caps_heading_max_len: usize,
}

fn default_caps_max_len() -> usize {
    60
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self::classic()
    }
}

impl SectionCatalog {
    /// Create a catalog without any sections.
    pub fn empty() -> Self {
        Self {
            sections: Vec::new(),
            synonyms: Vec::new(),
            heading_patterns: Vec::new(),
            experience_sections: Vec::new(),
            order: Vec::new(),
            caps_heading_max_len: default_caps_max_len(),
        }
    }

    /// Catalog of a built-in profile.
    pub fn for_profile(profile: SectionProfile) -> Self {
        match profile {
            SectionProfile::Classic => Self::classic(),
            SectionProfile::Extended => Self::extended(),
        }
    }

    /// The classic profile.
    pub fn classic() -> Self {
        Self::empty()
            .with_sections([
                "Experience",
                "Core Competencies",
                "Skills",
                "Education",
                "Certifications",
                "Summary",
            ])
            .with_synonym("Work Experience", "Experience")
            .with_synonym("Employment", "Experience")
            .with_synonym("Professional Summary", "Summary")
            .with_synonym("Objective", "Summary")
            .with_synonym("Technical Skills", "Skills")
            .with_synonym("Core Competency", "Core Competencies")
            .with_synonym("Competencies", "Core Competencies")
            .with_synonym("Certs", "Certifications")
            .with_heading_pattern(heading_line("experience|work experience|employment"))
            .with_heading_pattern(heading_line("core competencies|competencies|core competency"))
            .with_heading_pattern(heading_line("skills|technical skills"))
            .with_heading_pattern(heading_line("education"))
            .with_heading_pattern(heading_line("certifications|certs"))
            .with_heading_pattern(heading_line("summary|objective|professional summary"))
            .with_experience_section("Experience")
            .with_order([
                "Core Competencies",
                "Skills",
                "Education",
                "Certifications",
                "Summary",
                Section::UNCATEGORIZED,
            ])
    }

    /// The extended profile.
    pub fn extended() -> Self {
        Self::empty()
            .with_sections([
                "Professional Profile",
                "Technical Skills",
                "Professional Experience",
                "Additional Skills & Qualifications",
                "Experience",
                "Core Competencies",
                "Skills",
                "Education",
                "Certifications",
                "Summary",
            ])
            .with_synonym("Work Experience", "Experience")
            .with_synonym("Employment", "Experience")
            .with_synonym("Professional Experience", "Professional Experience")
            .with_synonym("Professional Summary", "Summary")
            .with_synonym("Objective", "Summary")
            .with_synonym("Profile", "Professional Profile")
            .with_synonym("Technical Skills", "Technical Skills")
            .with_synonym("Core Competency", "Core Competencies")
            .with_synonym("Competencies", "Core Competencies")
            .with_synonym("Additional Skills", "Additional Skills & Qualifications")
            .with_synonym("Additional Qualifications", "Additional Skills & Qualifications")
            .with_synonym("Certs", "Certifications")
            .with_heading_pattern(heading_line("professional profile|profile"))
            .with_heading_pattern(heading_line("technical skills"))
            .with_heading_pattern(heading_line(
                "professional experience|experience|work experience|employment",
            ))
            .with_heading_pattern(heading_line(
                "additional skills & qualifications|additional skills|additional qualifications",
            ))
            .with_heading_pattern(heading_line("core competencies|competencies|core competency"))
            .with_heading_pattern(heading_line("skills"))
            .with_heading_pattern(heading_line("education"))
            .with_heading_pattern(heading_line("certifications|certs"))
            .with_heading_pattern(heading_line("summary|objective|professional summary"))
            .with_experience_section("Experience")
            .with_experience_section("Professional Experience")
            .with_order([
                "Professional Profile",
                "Technical Skills",
                "Additional Skills & Qualifications",
                "Core Competencies",
                "Skills",
                "Education",
                "Certifications",
                "Summary",
                Section::UNCATEGORIZED,
            ])
    }

    /// Load a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Other(format!("Invalid section catalog: {}", e)))
    }

    /// Add a canonical section to the allow-list.
    pub fn with_section(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !contains_ignore_case(&self.sections, &name) {
            self.sections.push(name);
        }
        self
    }

    /// Add several canonical sections.
    pub fn with_sections<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        for name in names {
            self = self.with_section(name);
        }
        self
    }

    /// Map an alternative heading onto a canonical section.
    pub fn with_synonym(mut self, alias: impl Into<String>, section: impl Into<String>) -> Self {
        self.synonyms.push(Synonym {
            alias: alias.into(),
            section: section.into(),
        });
        self
    }

    /// Add a whole-line heading regex.
    pub fn with_heading_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.heading_patterns.push(pattern.into());
        self
    }

    /// Mark a section as experience-like (content grouped by role).
    pub fn with_experience_section(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !contains_ignore_case(&self.experience_sections, &name) {
            self.experience_sections.push(name);
        }
        self
    }

    /// Replace the preferred emission order.
    pub fn with_order<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.order = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the maximum length of an all-caps heading line.
    pub fn with_caps_heading_max_len(mut self, len: usize) -> Self {
        self.caps_heading_max_len = len;
        self
    }

    /// Map a raw heading onto a section name.
    ///
    /// Lookup order: synonym table, allow-list, then title-cased fallback.
    /// A trailing colon is ignored; blank names become `Uncategorized`.
    pub fn canonicalize(&self, name: &str) -> Section {
        let name = name.trim();
        let name = name.strip_suffix(':').unwrap_or(name).trim();
        if name.is_empty() {
            return Section::uncategorized();
        }

        let lower = name.to_lowercase();
        if let Some(synonym) = self
            .synonyms
            .iter()
            .find(|s| s.alias.to_lowercase() == lower)
        {
            return Section::new(synonym.section.clone());
        }
        if let Some(section) = self.sections.iter().find(|s| s.to_lowercase() == lower) {
            return Section::new(section.clone());
        }
        Section::new(title_case(name))
    }

    /// True if the section survives aggregation.
    pub fn is_allowed(&self, section: &Section) -> bool {
        section.is_uncategorized() || contains_ignore_case(&self.sections, section.as_str())
    }

    /// True if the section groups its content by role.
    pub fn is_experience(&self, section: &Section) -> bool {
        contains_ignore_case(&self.experience_sections, section.as_str())
    }

    /// Experience-like sections in emission order.
    pub fn experience_order(&self) -> Vec<Section> {
        self.experience_sections
            .iter()
            .map(|name| Section::new(name.clone()))
            .collect()
    }

    /// Other sections in preferred emission order.
    pub fn section_order(&self) -> Vec<Section> {
        self.order.iter().map(|name| Section::new(name.clone())).collect()
    }
}

/// Build a case-insensitive whole-line heading pattern from alternatives.
pub fn heading_line(alternatives: &str) -> String {
    format!(r"^\s*({})\s*:?\s*$", alternatives)
}

fn contains_ignore_case(names: &[String], name: &str) -> bool {
    let lower = name.to_lowercase();
    names.iter().any(|n| n.to_lowercase() == lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_synonyms() {
        let catalog = SectionCatalog::classic();
        assert_eq!(catalog.canonicalize("Work Experience").as_str(), "Experience");
        assert_eq!(catalog.canonicalize("work experience:").as_str(), "Experience");
        assert_eq!(catalog.canonicalize("Technical Skills").as_str(), "Skills");
        assert_eq!(catalog.canonicalize("CERTS").as_str(), "Certifications");
    }

    #[test]
    fn test_canonicalize_allow_list_and_fallback() {
        let catalog = SectionCatalog::classic();
        assert_eq!(catalog.canonicalize("education").as_str(), "Education");
        assert_eq!(catalog.canonicalize("volunteer work").as_str(), "Volunteer Work");
        assert!(catalog.canonicalize("   ").is_uncategorized());
        assert!(catalog.canonicalize(":").is_uncategorized());
    }

    #[test]
    fn test_profiles_differ_on_technical_skills() {
        let classic = SectionCatalog::classic();
        let extended = SectionCatalog::extended();
        assert_eq!(classic.canonicalize("Technical Skills").as_str(), "Skills");
        assert_eq!(extended.canonicalize("Technical Skills").as_str(), "Technical Skills");
        assert_eq!(extended.canonicalize("Profile").as_str(), "Professional Profile");
    }

    #[test]
    fn test_allow_list() {
        let catalog = SectionCatalog::classic();
        assert!(catalog.is_allowed(&Section::new("Skills")));
        assert!(catalog.is_allowed(&Section::uncategorized()));
        assert!(!catalog.is_allowed(&Section::new("Hobbies")));
        assert!(!catalog.is_allowed(&Section::new("Professional Profile")));
        assert!(SectionCatalog::extended().is_allowed(&Section::new("Professional Profile")));
    }

    #[test]
    fn test_experience_sections() {
        let classic = SectionCatalog::classic();
        assert!(classic.is_experience(&Section::new("experience")));
        assert!(!classic.is_experience(&Section::new("Professional Experience")));

        let extended = SectionCatalog::extended();
        let names: Vec<String> = extended
            .experience_order()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["Experience", "Professional Experience"]);
    }

    #[test]
    fn test_custom_catalog_builder() {
        let catalog = SectionCatalog::empty()
            .with_section("Projects")
            .with_section("projects")
            .with_synonym("Side Projects", "Projects")
            .with_heading_pattern(heading_line("projects|side projects"));

        assert_eq!(catalog.sections.len(), 1);
        assert_eq!(catalog.canonicalize("side projects").as_str(), "Projects");
        assert_eq!(catalog.heading_patterns.len(), 1);
    }

    #[test]
    fn test_catalog_json_roundtrip() {
        let json = serde_json::to_string(&SectionCatalog::extended()).unwrap();
        let loaded = SectionCatalog::from_json(&json).unwrap();
        assert_eq!(loaded, SectionCatalog::extended());

        let minimal = SectionCatalog::from_json(r#"{"sections": ["Projects"]}"#).unwrap();
        assert_eq!(minimal.caps_heading_max_len, 60);
        assert!(minimal.synonyms.is_empty());
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("Extended".parse::<SectionProfile>().unwrap(), SectionProfile::Extended);
        assert_eq!(SectionProfile::default(), SectionProfile::Classic);
        assert!("fancy".parse::<SectionProfile>().is_err());
    }
}
