//! Markdown rendering for collated reports.

use super::layout::{outline, OutlineBlock};
use super::options::RenderOptions;
use crate::model::Report;

/// Convert a report to Markdown.
pub fn to_markdown(report: &Report, options: &RenderOptions) -> String {
    MarkdownRenderer::new(options.clone()).render(report)
}

/// Markdown renderer.
///
/// The title becomes `#`, sections and experience families `##`, roles `###`,
/// and bullets a flat `- ` list.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a report to Markdown.
    pub fn render(&self, report: &Report) -> String {
        let mut output = String::new();
        let mut in_list = false;

        for block in outline(report, &self.options) {
            match block {
                OutlineBlock::Title(text) => {
                    output.push_str(&format!("# {}\n\n", escape_markdown(&text)));
                }
                OutlineBlock::Heading { level, text } => {
                    if in_list {
                        output.push('\n');
                        in_list = false;
                    }
                    let prefix = "#".repeat(level as usize + 1);
                    output.push_str(&format!("{} {}\n\n", prefix, escape_markdown(&text)));
                }
                OutlineBlock::Item { text, source } => {
                    output.push_str("- ");
                    output.push_str(&escape_markdown(&text));
                    if let Some(source) = source {
                        output.push_str(&format!(" _({})_", escape_markdown(&source)));
                    }
                    output.push('\n');
                    in_list = true;
                }
            }
        }

        let mut output = output.trim_end().to_string();
        output.push('\n');
        output
    }
}

/// Escape special Markdown characters.
/// Only characters that could be misread as inline syntax are escaped.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
