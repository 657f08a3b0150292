//! Error types for docsmith

use std::process::ExitCode;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DocsmithError>;

/// All error conditions surfaced by docsmith
///
/// Per-declaration anomalies never show up here: a malformed type node,
/// an absent field list, or an untermined example block degrades to a
/// fallback value inside the extractor. The only structural failure the
/// analysis itself reports is `NoPackageFound`.
#[derive(Debug, Error)]
pub enum DocsmithError {
    /// The directory contained no documentable (non-test) Go package
    #[error("no Go package found in {path:?}")]
    NoPackageFound { path: String },

    /// The tree-sitter grammar could not be loaded or a file could not be parsed
    #[error("parse failure: {message}")]
    ParseFailure { message: String },

    /// Invalid or unusable configuration
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// The LLM endpoint returned an unusable response
    #[error("enhancement failed: {message}")]
    Enhance { message: String },

    /// One or more packages failed during a batch run
    #[error("failed to document {failed} packages")]
    GenerationFailed { failed: usize },

    /// I/O error reading sources or writing documentation
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP error talking to the enhancement endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// File watcher error
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),
}

impl DocsmithError {
    /// Map the error to a process exit code
    pub fn exit_code(&self) -> ExitCode {
        let code: u8 = match self {
            Self::NoPackageFound { .. } => 2,
            Self::Config { .. } => 3,
            Self::ParseFailure { .. } => 4,
            Self::GenerationFailed { .. } => 5,
            Self::Io(_) => 6,
            _ => 1,
        };
        ExitCode::from(code)
    }
}
