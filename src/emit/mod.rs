//! Report emitters: a plugin registry dispatching on the output file extension.
//!
//! # Example
//!
//! ```no_run
//! use resume_collate::emit::EmitterRegistry;
//! use resume_collate::render::RenderOptions;
//! use resume_collate::Report;
//! use std::path::Path;
//!
//! fn main() -> resume_collate::Result<()> {
//!     let registry = EmitterRegistry::with_defaults();
//!     let report = Report::default();
//!     registry.emit(&report, Path::new("bullets.xlsx"), &RenderOptions::default())?;
//!     Ok(())
//! }
//! ```

mod formats;

pub use formats::{DocxEmitter, JsonEmitter, MarkdownEmitter, XlsxEmitter};

use crate::error::{Error, Result};
use crate::model::Report;
use crate::render::RenderOptions;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Trait for report emitters.
///
/// Implement this trait to add a new output format.
pub trait ReportEmitter: Send + Sync {
    /// Output extensions handled by this emitter, lowercase without the dot.
    fn supported_extensions(&self) -> &[&str];

    /// Name of this emitter.
    fn name(&self) -> &str;

    /// Render a report into the artifact's bytes.
    fn render(&self, report: &Report, options: &RenderOptions) -> Result<Vec<u8>>;

    /// Check if this emitter handles the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry of report emitters keyed by output extension.
pub struct EmitterRegistry {
    emitters: HashMap<String, Arc<dyn ReportEmitter>>,
    by_name: HashMap<String, Arc<dyn ReportEmitter>>,
}

impl EmitterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            emitters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the DOCX, XLSX, Markdown and JSON emitters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DocxEmitter::new()));
        registry.register(Arc::new(XlsxEmitter::new()));
        registry.register(Arc::new(MarkdownEmitter::new()));
        registry.register(Arc::new(JsonEmitter::new()));
        registry
    }

    /// Register an emitter for all its extensions.
    pub fn register(&mut self, emitter: Arc<dyn ReportEmitter>) {
        for ext in emitter.supported_extensions() {
            self.emitters.insert(ext.to_lowercase(), emitter.clone());
        }
        self.by_name.insert(emitter.name().to_lowercase(), emitter);
    }

    /// Get an emitter by extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn ReportEmitter>> {
        self.emitters.get(&ext.to_lowercase()).cloned()
    }

    /// Get an emitter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn ReportEmitter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.emitters.contains_key(&ext.to_lowercase())
    }

    /// All supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.emitters.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Emitter for an output path.
    pub fn for_path(&self, path: &Path) -> Result<Arc<dyn ReportEmitter>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::InvalidOutput {
                path: path.to_path_buf(),
                reason: format!(
                    "missing extension (expected one of: {})",
                    self.supported_extensions().join(", ")
                ),
            })?;

        self.get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedOutput(ext.to_string()))
    }

    /// Check an output path before any work starts.
    ///
    /// The extension must belong to a registered emitter; a missing parent
    /// directory is created.
    pub fn validate_output(&self, path: &Path) -> Result<()> {
        self.for_path(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if parent.exists() && !parent.is_dir() {
                return Err(Error::InvalidOutput {
                    path: path.to_path_buf(),
                    reason: format!("{} is not a directory", parent.display()),
                });
            }
            fs::create_dir_all(parent).map_err(|e| Error::InvalidOutput {
                path: path.to_path_buf(),
                reason: format!("cannot create {}: {}", parent.display(), e),
            })?;
        }

        if path.is_dir() {
            return Err(Error::InvalidOutput {
                path: path.to_path_buf(),
                reason: "path is a directory".to_string(),
            });
        }
        Ok(())
    }

    /// Render a report and write it to `path`.
    ///
    /// An empty report writes nothing and returns [`Error::EmptyResult`].
    /// The artifact is written to a sibling temporary file and renamed into
    /// place, so either the whole report lands or none of it does.
    pub fn emit(&self, report: &Report, path: &Path, options: &RenderOptions) -> Result<()> {
        let emitter = self.for_path(path)?;
        if report.is_empty() {
            return Err(Error::EmptyResult);
        }

        let bytes = emitter.render(report, options)?;
        write_all_or_nothing(path, &bytes)?;

        log::info!(
            "Wrote {} report ({} bytes) to {}",
            emitter.name(),
            bytes.len(),
            path.display()
        );
        Ok(())
    }
}

impl Default for EmitterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn write_all_or_nothing(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp = temp_path(path);
    let write_err = |source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Err(e) = fs::write(&temp, bytes) {
        let _ = fs::remove_file(&temp);
        return Err(write_err(e));
    }
    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(write_err(e));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
