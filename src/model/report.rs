//! Report types: sections, roles, bullets and their aggregation.

use crate::classify::text::bullet_key;
use crate::extract::CollateStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Label of the fallback role for experience bullets seen before any role header.
pub const UNKNOWN_ROLE: &str = "Role: Unknown";

/// A canonical section name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section(String);

impl Section {
    /// Name of the bucket for content seen before any heading.
    pub const UNCATEGORIZED: &'static str = "Uncategorized";

    /// Create a section from an already-canonical name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The `Uncategorized` section.
    pub fn uncategorized() -> Self {
        Self(Self::UNCATEGORIZED.to_string())
    }

    /// Section name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the `Uncategorized` section.
    pub fn is_uncategorized(&self) -> bool {
        self.matches(Self::UNCATEGORIZED)
    }

    /// Case-insensitive name comparison.
    pub fn matches(&self, name: &str) -> bool {
        self.0.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Section {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// One cleaned line of content, optionally tagged with the document it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    /// Cleaned bullet text
    pub text: String,

    /// Source document identifier (provenance)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Bullet {
    /// Create an untagged bullet.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
        }
    }

    /// Tag the bullet with its source document.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Deduplication identity of this bullet.
    pub fn key(&self) -> String {
        bullet_key(&self.text)
    }
}

/// Role label to ordered bullets, within one experience-like section.
pub type RoleMap = BTreeMap<String, Vec<Bullet>>;

/// Bullets bucketed by experience family and role, and by section for everything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collation {
    /// Experience-like section to its role buckets
    pub experience: BTreeMap<Section, RoleMap>,

    /// Every other section to its bullets
    pub sections: BTreeMap<Section, Vec<Bullet>>,
}

impl Collation {
    /// Create an empty collation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure a role bucket exists, even if it stays empty.
    pub fn open_role(&mut self, family: &Section, role: &str) {
        self.experience
            .entry(family.clone())
            .or_default()
            .entry(role.to_string())
            .or_default();
    }

    /// Append a bullet to a role bucket.
    pub fn push_role_bullet(&mut self, family: &Section, role: &str, bullet: Bullet) {
        self.experience
            .entry(family.clone())
            .or_default()
            .entry(role.to_string())
            .or_default()
            .push(bullet);
    }

    /// Append a bullet to a section bucket.
    pub fn push_section_bullet(&mut self, section: &Section, bullet: Bullet) {
        self.sections
            .entry(section.clone())
            .or_default()
            .push(bullet);
    }

    /// Role buckets of one experience family.
    pub fn roles(&self, family: &Section) -> Option<&RoleMap> {
        self.experience.get(family)
    }

    /// Bullets of one role.
    pub fn role(&self, family: &Section, role: &str) -> Option<&[Bullet]> {
        self.experience
            .get(family)
            .and_then(|roles| roles.get(role))
            .map(Vec::as_slice)
    }

    /// Bullets of one section.
    pub fn section(&self, section: &Section) -> Option<&[Bullet]> {
        self.sections.get(section).map(Vec::as_slice)
    }

    /// Role buckets of a family sorted case-insensitively by label.
    pub fn roles_sorted(&self, family: &Section) -> Vec<(&str, &[Bullet])> {
        let mut roles: Vec<(&str, &[Bullet])> = self
            .experience
            .get(family)
            .map(|roles| {
                roles
                    .iter()
                    .map(|(label, bullets)| (label.as_str(), bullets.as_slice()))
                    .collect()
            })
            .unwrap_or_default();
        roles.sort_by_key(|(label, _)| label.to_lowercase());
        roles
    }

    /// Every bullet bucket, role and section alike.
    pub fn buckets_mut(&mut self) -> impl Iterator<Item = &mut Vec<Bullet>> {
        self.experience
            .values_mut()
            .flat_map(|roles| roles.values_mut())
            .chain(self.sections.values_mut())
    }

    /// Drop empty roles, empty families and empty sections.
    pub fn prune_empty(&mut self) {
        for roles in self.experience.values_mut() {
            roles.retain(|_, bullets| !bullets.is_empty());
        }
        self.experience.retain(|_, roles| !roles.is_empty());
        self.sections.retain(|_, bullets| !bullets.is_empty());
    }

    /// Total number of bullets.
    pub fn bullet_count(&self) -> usize {
        let roles: usize = self
            .experience
            .values()
            .flat_map(|roles| roles.values())
            .map(Vec::len)
            .sum();
        let sections: usize = self.sections.values().map(Vec::len).sum();
        roles + sections
    }

    /// Total number of role buckets across all families.
    pub fn role_count(&self) -> usize {
        self.experience.values().map(BTreeMap::len).sum()
    }

    /// True when no bucket holds a bullet.
    pub fn is_empty(&self) -> bool {
        self.bullet_count() == 0
    }
}

/// The aggregated, filtered and deduplicated result of a collation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    /// Final buckets
    pub collation: Collation,

    /// Experience families in emission order
    pub experience_order: Vec<Section>,

    /// Other sections in preferred emission order
    pub section_order: Vec<Section>,

    /// Documents that contributed, in processing order
    pub sources: Vec<String>,

    /// Run statistics
    pub stats: CollateStats,
}

impl Report {
    /// Experience families with their roles sorted by label, in emission order.
    pub fn ordered_families(&self) -> Vec<(&Section, Vec<(&str, &[Bullet])>)> {
        ordered_keys(&self.experience_order, self.collation.experience.keys())
            .into_iter()
            .map(|family| (family, self.collation.roles_sorted(family)))
            .filter(|(_, roles)| !roles.is_empty())
            .collect()
    }

    /// Non-experience sections in preferred order; sections missing from the
    /// preferred order follow alphabetically.
    pub fn ordered_sections(&self) -> Vec<(&Section, &[Bullet])> {
        ordered_keys(&self.section_order, self.collation.sections.keys())
            .into_iter()
            .filter_map(|section| {
                self.collation
                    .section(section)
                    .filter(|bullets| !bullets.is_empty())
                    .map(|bullets| (section, bullets))
            })
            .collect()
    }

    /// True when the report has nothing to emit.
    pub fn is_empty(&self) -> bool {
        self.collation.is_empty()
    }
}

fn ordered_keys<'a>(
    preferred: &[Section],
    present: impl Iterator<Item = &'a Section>,
) -> Vec<&'a Section> {
    let present: Vec<&Section> = present.collect();
    let mut ordered: Vec<&Section> = preferred
        .iter()
        .filter_map(|want| present.iter().copied().find(|have| *have == want))
        .collect();
    for section in &present {
        if !ordered.contains(section) {
            ordered.push(section);
        }
    }
    ordered
}
