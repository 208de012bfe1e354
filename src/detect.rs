//! DOCX container detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Main document part every WordprocessingML package carries.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// File extension of the documents collated by this crate.
pub const DOCX_EXTENSION: &str = "docx";

/// Detect whether a file looks like a ZIP container from its first bytes.
///
/// # Example
/// ```no_run
/// use resume_collate::detect::detect_container_from_path;
///
/// detect_container_from_path("resume.docx").unwrap();
/// ```
pub fn detect_container_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    reader.read_exact(&mut header).map_err(|_| Error::NotDocx)?;
    detect_container_from_bytes(&header)
}

/// Detect whether bytes start with a ZIP local file header.
pub fn detect_container_from_bytes(data: &[u8]) -> Result<()> {
    if data.len() < ZIP_MAGIC.len() || !data.starts_with(ZIP_MAGIC) {
        return Err(Error::NotDocx);
    }
    Ok(())
}

/// Check that an opened archive contains the main document part.
pub fn verify_package<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<()> {
    if archive.by_name(DOCUMENT_PART).is_err() {
        return Err(Error::MissingPart(DOCUMENT_PART.to_string()));
    }
    Ok(())
}

/// Check if a path has the `.docx` extension (case-insensitive).
pub fn has_docx_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(DOCX_EXTENSION))
        .unwrap_or(false)
}

/// Check if a file is a readable DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if detect_container_from_path(path).is_err() {
        return false;
    }
    File::open(path)
        .ok()
        .and_then(|f| ZipArchive::new(BufReader::new(f)).ok())
        .map(|mut archive| verify_package(&mut archive).is_ok())
        .unwrap_or(false)
}

/// Check if bytes start like a DOCX (ZIP) container.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_container_from_bytes(data).is_ok()
}
