//! Rendering options and configuration.

/// Title of the document-style report.
pub const DEFAULT_TITLE: &str = "Collated Bullets from Resumes (Role-separated Experience)";

/// Longest sheet name a workbook accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Options for rendering a report.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Title heading of document-style output
    pub title: String,

    /// Maximum sheet name length in characters
    pub max_sheet_name_len: usize,

    /// Body font of document-style output
    pub font_name: String,

    /// Body font size in points
    pub font_size_pt: u32,

    /// Append the source file to each bullet in document-style output
    pub annotate_sources: bool,

    /// JSON layout
    pub json_format: JsonFormat,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the maximum sheet name length.
    pub fn with_max_sheet_name_len(mut self, len: usize) -> Self {
        self.max_sheet_name_len = len.max(1);
        self
    }

    /// Set the body font.
    pub fn with_font(mut self, name: impl Into<String>, size_pt: u32) -> Self {
        self.font_name = name.into();
        self.font_size_pt = size_pt;
        self
    }

    /// Enable or disable source annotations.
    pub fn with_source_annotations(mut self, annotate: bool) -> Self {
        self.annotate_sources = annotate;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            max_sheet_name_len: MAX_SHEET_NAME_LEN,
            font_name: "Calibri".to_string(),
            font_size_pt: 11,
            annotate_sources: false,
            json_format: JsonFormat::Pretty,
        }
    }
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}
