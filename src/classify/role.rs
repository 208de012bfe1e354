//! Role header detection inside experience-like sections.

use regex::Regex;

const MONTH_YEAR: &str = r"\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec)\s+\d{4}\b";
const YEAR: &str = r"\b\d{4}\b";
const MONTH_SLASH_YEAR: &str = r"\b\d{1,2}/\d{4}\b";

/// Heuristics that mark a line as a role header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleHeuristic {
    /// "Jan 2020 – Present", "2019–2024", "1/2020 to 12/2023"
    DateRange,
    /// " - ", " — " or " | " between title, company and dates
    Separator,
    /// Mostly capitalized words on a short line
    TitleCaseDensity,
    /// At least one bold run
    Bold,
}

impl RoleHeuristic {
    /// Evaluation order.
    pub const ALL: [RoleHeuristic; 4] = [
        RoleHeuristic::DateRange,
        RoleHeuristic::Separator,
        RoleHeuristic::TitleCaseDensity,
        RoleHeuristic::Bold,
    ];
}

/// Detects lines that open a new role grouping.
#[derive(Debug, Clone)]
pub struct RoleHeaderDetector {
    heuristics: Vec<RoleHeuristic>,
    date_range: Regex,
    separators: Vec<&'static str>,
    min_words: usize,
    min_title_ratio: f64,
    max_len: usize,
}

impl Default for RoleHeaderDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleHeaderDetector {
    /// Create a detector with every heuristic enabled.
    pub fn new() -> Self {
        let date = [MONTH_YEAR, YEAR, MONTH_SLASH_YEAR].join("|");
        let pattern = format!(
            r"(?i)(?:{date})\s*(?:[-–—]\s*|to\s+)\s*(?:Present|Current|Now|{date})",
            date = date
        );
        Self {
            heuristics: RoleHeuristic::ALL.to_vec(),
            date_range: Regex::new(&pattern).expect("Invalid date range regex"),
            separators: vec![" - ", " — ", " | "],
            min_words: 2,
            min_title_ratio: 0.6,
            max_len: 120,
        }
    }

    /// Restrict the detector to a subset of heuristics.
    pub fn with_heuristics(mut self, heuristics: impl IntoIterator<Item = RoleHeuristic>) -> Self {
        self.heuristics = heuristics.into_iter().collect();
        self
    }

    /// True if any heuristic accepts the line.
    pub fn is_role_header(&self, text: &str, is_bold: bool) -> bool {
        self.matched(text, is_bold).is_some()
    }

    /// The first heuristic that accepts the line.
    pub fn matched(&self, text: &str, is_bold: bool) -> Option<RoleHeuristic> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.heuristics
            .iter()
            .copied()
            .find(|heuristic| self.check(*heuristic, text, is_bold))
    }

    fn check(&self, heuristic: RoleHeuristic, text: &str, is_bold: bool) -> bool {
        match heuristic {
            RoleHeuristic::DateRange => self.date_range.is_match(text),
            RoleHeuristic::Separator => self.separators.iter().any(|sep| text.contains(sep)),
            RoleHeuristic::TitleCaseDensity => self.is_title_dense(text),
            RoleHeuristic::Bold => is_bold,
        }
    }

    fn is_title_dense(&self, text: &str) -> bool {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() < self.min_words || text.chars().count() > self.max_len {
            return false;
        }
        let titled = words
            .iter()
            .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
            .count();
        titled as f64 / words.len() as f64 > self.min_title_ratio
    }
}
