//! Bullet-line detection.

use super::text::{starts_with_glyph, starts_with_numbering};
use crate::model::Paragraph;

/// Detects bulleted or numbered lines.
#[derive(Debug, Clone)]
pub struct BulletDetector {
    style_markers: Vec<String>,
}

impl Default for BulletDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletDetector {
    /// Create a detector that treats "list" and "bullet" styles as bullets.
    pub fn new() -> Self {
        Self {
            style_markers: vec!["list".to_string(), "bullet".to_string()],
        }
    }

    /// Check a paragraph.
    pub fn is_bullet(&self, paragraph: &Paragraph) -> bool {
        self.is_bullet_text(&paragraph.plain_text(), paragraph.style_name())
    }

    /// Check raw text with its style name.
    ///
    /// Empty text never counts. A list style wins outright; otherwise the
    /// trimmed text must start with a bullet glyph or a numbering token.
    pub fn is_bullet_text(&self, text: &str, style_name: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let style = style_name.to_lowercase();
        self.style_markers.iter().any(|m| style.contains(m.as_str()))
            || starts_with_glyph(text)
            || starts_with_numbering(text)
    }
}
