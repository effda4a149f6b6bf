// src/error/types.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Pattern `{pattern}` is missing required capture group 1")]
    MissingCaptureGroup { pattern: String },

    #[error("Glob error: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScanResult<T> = Result<T, ScanError>;
