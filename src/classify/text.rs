//! Text normalization for bullet lines and section names.

use once_cell::sync::Lazy;
use regex::Regex;

/// Glyphs that mark a bulleted line.
pub const BULLET_GLYPHS: [char; 5] = ['•', '-', '–', '*', '·'];

static GLYPH_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[•\-–*·]+\s+").expect("Invalid glyph prefix regex"));

static NUMBERING_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d+\.|\d+\)|[a-zA-Z]\)|[a-zA-Z]\.)\s+").expect("Invalid numbering regex")
});

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Strip bullet glyphs and a numbering token, then collapse whitespace.
///
/// ```
/// use resume_collate::classify::clean;
///
/// assert_eq!(clean("• Led a team of 5 engineers"), "Led a team of 5 engineers");
/// assert_eq!(clean("3) Optimized database queries"), "Optimized database queries");
/// assert_eq!(clean("  multiple   spaces   here "), "multiple spaces here");
/// ```
pub fn clean(raw: &str) -> String {
    let text = raw.trim();
    let text = GLYPH_PREFIX.replace(text, "");
    let text = NUMBERING_PREFIX.replace(&text, "");
    WHITESPACE_RUN.replace_all(&text, " ").trim().to_string()
}

/// Identity key used for deduplication: trimmed and lowercased.
pub fn bullet_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// True if the text starts with a bullet glyph.
pub fn starts_with_glyph(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|c| BULLET_GLYPHS.contains(&c))
}

/// True if the text starts with a numbering token followed by whitespace.
pub fn starts_with_numbering(text: &str) -> bool {
    NUMBERING_PREFIX.is_match(text)
}

/// Title-case a string: a cased character is upper-cased when it follows an
/// uncased one and lower-cased otherwise ("AI/ML SKILLS" -> "Ai/Ml Skills").
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for c in text.chars() {
        let cased = is_cased(c);
        if cased && !prev_cased {
            out.extend(c.to_uppercase());
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }
    out
}

/// True if the text has at least one cased character and no lower-case ones.
pub fn is_all_upper(text: &str) -> bool {
    let mut any_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            any_cased = true;
        }
    }
    any_cased
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}
