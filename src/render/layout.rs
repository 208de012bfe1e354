//! Format-neutral projections of a report: an outline for document-style
//! output and sheets for tabular output.

use super::options::RenderOptions;
use crate::model::{Bullet, Report};
use std::collections::HashSet;

/// One block of document-style output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineBlock {
    /// Report title
    Title(String),
    /// Heading at level 1 (section or family) or 2 (role)
    Heading {
        /// Heading level
        level: u8,
        /// Heading text
        text: String,
    },
    /// One bullet
    Item {
        /// Bullet text
        text: String,
        /// Source file, when annotations are enabled
        source: Option<String>,
    },
}

/// Document-style outline: title, one group per experience family with its
/// roles, then the other sections in preferred order.
pub fn outline(report: &Report, options: &RenderOptions) -> Vec<OutlineBlock> {
    let mut blocks = vec![OutlineBlock::Title(options.title.clone())];

    for (family, roles) in report.ordered_families() {
        blocks.push(OutlineBlock::Heading {
            level: 1,
            text: family.to_string(),
        });
        for (role, bullets) in roles {
            blocks.push(OutlineBlock::Heading {
                level: 2,
                text: role.to_string(),
            });
            blocks.extend(items(bullets, options));
        }
    }

    for (section, bullets) in report.ordered_sections() {
        blocks.push(OutlineBlock::Heading {
            level: 1,
            text: section.to_string(),
        });
        blocks.extend(items(bullets, options));
    }

    blocks
}

fn items<'a>(bullets: &'a [Bullet], options: &'a RenderOptions) -> impl Iterator<Item = OutlineBlock> + 'a {
    bullets.iter().map(move |bullet| OutlineBlock::Item {
        text: bullet.text.clone(),
        source: bullet.source.clone().filter(|_| options.annotate_sources),
    })
}

/// One sheet of tabular output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Sheet name, already truncated and unique
    pub name: String,
    /// Column headers
    pub columns: Vec<&'static str>,
    /// Data rows
    pub rows: Vec<Vec<String>>,
}

/// Tabular projection: one sheet per experience family with
/// `[Role, Bullet, SourceFile]`, then one per section with `[Bullet, SourceFile]`.
pub fn sheets(report: &Report, options: &RenderOptions) -> Vec<Sheet> {
    let mut names = SheetNames::new(options.max_sheet_name_len);
    let mut sheets = Vec::new();

    for (family, roles) in report.ordered_families() {
        let rows = roles
            .iter()
            .flat_map(|(role, bullets)| {
                bullets.iter().map(move |bullet| {
                    vec![role.to_string(), bullet.text.clone(), source_cell(bullet)]
                })
            })
            .collect();
        sheets.push(Sheet {
            name: names.claim(&format!("{} (by Role)", family)),
            columns: vec!["Role", "Bullet", "SourceFile"],
            rows,
        });
    }

    for (section, bullets) in report.ordered_sections() {
        let rows = bullets
            .iter()
            .map(|bullet| vec![bullet.text.clone(), source_cell(bullet)])
            .collect();
        sheets.push(Sheet {
            name: names.claim(section.as_str()),
            columns: vec!["Bullet", "SourceFile"],
            rows,
        });
    }

    sheets
}

fn source_cell(bullet: &Bullet) -> String {
    bullet.source.clone().unwrap_or_default()
}

/// Hands out valid, unique sheet names.
struct SheetNames {
    max_len: usize,
    taken: HashSet<String>,
}

impl SheetNames {
    fn new(max_len: usize) -> Self {
        Self {
            max_len,
            taken: HashSet::new(),
        }
    }

    /// Replace forbidden characters, truncate, and suffix on collision.
    fn claim(&mut self, wanted: &str) -> String {
        let clean: String = wanted
            .chars()
            .map(|c| if "[]:*?/\\".contains(c) { '_' } else { c })
            .collect();
        let base = truncate_chars(&clean, self.max_len);

        let mut name = base.clone();
        let mut n = 2;
        while self.taken.contains(&name.to_lowercase()) {
            let suffix = format!(" ({})", n);
            let keep = self.max_len.saturating_sub(suffix.chars().count());
            name = format!("{}{}", truncate_chars(&base, keep), suffix);
            n += 1;
        }
        self.taken.insert(name.to_lowercase());
        name
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
