use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading a manifest or assembling a release.
///
/// Every variant is terminal for the current invocation. The message
/// names the offending field or path so the operator can fix the
/// manifest or filesystem state and rerun; rerunning is the only
/// recovery mechanism.
#[derive(Error, Debug)]
pub enum TypshipError {
    /// `typst.toml` lacks a required field, or the field is empty.
    #[error("manifest field missing or empty: {field}")]
    ManifestFieldMissing { field: &'static str },

    /// `typst.toml` exists but is not a well-formed manifest.
    #[error("could not parse typst.toml: {detail}")]
    ManifestInvalid { detail: String },

    /// The typst compiler rejected the package entry point.
    #[error("entry point validation failed: {detail}")]
    ValidationFailed { detail: String },

    /// A required input file or directory does not exist.
    #[error("required source file missing: {}", path.display())]
    SourceFileMissing { path: PathBuf },

    /// A filesystem operation failed.
    #[error("I/O failure at {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl TypshipError {
    /// Wraps an [`io::Error`] with the path the operation was touching.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> TypshipError {
        TypshipError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TypshipError>;
