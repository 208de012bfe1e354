//! Error types for resume-collate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resume-collate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading resumes and writing reports.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input folder does not exist or is not a directory.
    #[error("Input folder does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// No matching documents were found under the input folder.
    #[error("No .docx files found in (or under) folder: {}", .0.display())]
    NoDocuments(PathBuf),

    /// The output path cannot be used.
    #[error("Invalid output path {}: {reason}", path.display())]
    InvalidOutput {
        /// Offending path
        path: PathBuf,
        /// Why it was rejected
        reason: String,
    },

    /// No emitter is registered for the requested output extension.
    #[error("Unsupported output format: {0}")]
    UnsupportedOutput(String),

    /// A heading or role pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern source
        pattern: String,
        /// Compiler message
        message: String,
    },

    /// The file is not a ZIP-based DOCX container.
    #[error("Unknown file format: not a valid DOCX")]
    NotDocx,

    /// A required part is missing from the DOCX package.
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// Error reading the ZIP container.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Malformed XML inside the container.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A single document could not be read.
    #[error("Failed to read '{path}': {message}")]
    DocumentRead {
        /// Document file name
        path: String,
        /// Underlying cause
        message: String,
    },

    /// Nothing survived extraction across the whole corpus.
    #[error("No bullets detected")]
    EmptyResult,

    /// Error while rendering a report.
    #[error("Rendering error: {0}")]
    Render(String),

    /// The final artifact could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        /// Target path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Wrap any per-document failure with the document's name.
    pub fn document_read(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Error::DocumentRead {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Whether this error concerns the run configuration (reported before any work).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InputNotFound(_)
                | Error::InvalidOutput { .. }
                | Error::UnsupportedOutput(_)
                | Error::InvalidPattern { .. }
        )
    }

    /// Whether this error is informational rather than a failure.
    pub fn is_informational(&self) -> bool {
        matches!(self, Error::EmptyResult | Error::NoDocuments(_))
    }
}
