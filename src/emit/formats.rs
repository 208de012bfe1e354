//! Built-in report emitters.

use super::ReportEmitter;
use crate::error::Result;
use crate::model::Report;
use crate::render::{to_docx, to_json, to_markdown, to_xlsx, RenderOptions};

/// Document-style emitter (`.docx`).
#[derive(Debug, Clone, Default)]
pub struct DocxEmitter {
    _private: (),
}

impl DocxEmitter {
    /// Create a new DOCX emitter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ReportEmitter for DocxEmitter {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn render(&self, report: &Report, options: &RenderOptions) -> Result<Vec<u8>> {
        to_docx(report, options)
    }
}

/// Tabular emitter (`.xlsx`), one sheet per experience family and per section.
#[derive(Debug, Clone, Default)]
pub struct XlsxEmitter {
    _private: (),
}

impl XlsxEmitter {
    /// Create a new XLSX emitter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ReportEmitter for XlsxEmitter {
    fn supported_extensions(&self) -> &[&str] {
        &["xlsx"]
    }

    fn name(&self) -> &str {
        "xlsx"
    }

    fn render(&self, report: &Report, options: &RenderOptions) -> Result<Vec<u8>> {
        to_xlsx(report, options)
    }
}

/// Markdown emitter (`.md`).
#[derive(Debug, Clone, Default)]
pub struct MarkdownEmitter {
    _private: (),
}

impl MarkdownEmitter {
    /// Create a new Markdown emitter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ReportEmitter for MarkdownEmitter {
    fn supported_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn name(&self) -> &str {
        "markdown"
    }

    fn render(&self, report: &Report, options: &RenderOptions) -> Result<Vec<u8>> {
        Ok(to_markdown(report, options).into_bytes())
    }
}

/// JSON emitter (`.json`), the full report including statistics.
#[derive(Debug, Clone, Default)]
pub struct JsonEmitter {
    _private: (),
}

impl JsonEmitter {
    /// Create a new JSON emitter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ReportEmitter for JsonEmitter {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, report: &Report, options: &RenderOptions) -> Result<Vec<u8>> {
        Ok(to_json(report, options.json_format)?.into_bytes())
    }
}
