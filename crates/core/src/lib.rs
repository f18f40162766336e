//! pagetext - page-range text extraction from PDF documents.

pub mod document;
pub mod error;
pub mod extract;
pub mod job;
pub mod render;

pub use document::Document;
pub use error::{ExtractError, Result};
pub use extract::{PageText, extract_range};
pub use job::{ExtractionJob, JobSummary};
pub use render::{OutputFormat, render};
