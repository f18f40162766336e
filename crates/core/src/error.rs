//! Error types for the pagetext extraction library.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for extraction operations.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("page index {index} out of range for document with {page_count} pages")]
    PageOutOfRange { index: usize, page_count: usize },

    #[error("text extraction failed on page {index}: {reason}")]
    TextExtraction { index: usize, reason: String },

    #[error("invalid page range: start {start} exceeds end {end}")]
    InvalidRange { start: usize, end: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type alias for ExtractError.
pub type Result<T> = std::result::Result<T, ExtractError>;
