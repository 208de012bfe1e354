//! Document discovery.

use crate::detect::has_docx_extension;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Collect every `.docx` file under `root`, recursively, in sorted order.
///
/// Sorting makes the keep-first tie-break of deduplication independent of the
/// filesystem's directory order.
pub fn collect_docx_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::InputNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(root)? {
        visit_entry(entry?, &mut files);
    }
    files.sort();
    log::debug!("Found {} .docx files under {}", files.len(), root.display());
    Ok(files)
}

/// Symlinked folders are not descended; symlinked files are kept.
fn visit_entry(entry: fs::DirEntry, files: &mut Vec<PathBuf>) {
    let entry_path = entry.path();
    let file_type = match entry.file_type() {
        Ok(file_type) => file_type,
        Err(e) => {
            log::warn!("Skipping '{}': {}", entry_path.display(), e);
            return;
        }
    };

    if file_type.is_dir() {
        collect_files_recursive(&entry_path, files);
    } else if has_docx_extension(&entry_path) && (file_type.is_file() || entry_path.is_file()) {
        files.push(entry_path);
    }
}

/// Unreadable subfolders are logged and skipped.
fn collect_files_recursive(path: &Path, files: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Skipping folder '{}': {}", path.display(), e);
            return;
        }
    };

    for entry in entries {
        match entry {
            Ok(entry) => visit_entry(entry, files),
            Err(e) => log::warn!("Skipping entry in '{}': {}", path.display(), e),
        }
    }
}
