//! Document handle over the delegated PDF parser.
//!
//! Parsing is entirely `lopdf`'s job; this module wraps its document
//! type behind the zero-based page indexing used throughout the crate.

use std::fs::File;
use std::io;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{ExtractError, Result};

/// An opaque handle to a loaded PDF document.
///
/// One extraction call owns the handle for its duration. The underlying
/// parse buffer is released when the handle drops, error path included.
#[derive(Debug)]
pub struct Document {
    inner: lopdf::Document,
}

impl Document {
    /// Open and parse the document at `path`.
    ///
    /// The file is memory-mapped rather than read into a buffer.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ExtractError::FileNotFound(path.to_path_buf()),
            _ => ExtractError::Io(e),
        })?;
        let mmap = unsafe { Mmap::map(&file) }?;
        Self::from_bytes(&mmap)
    }

    /// Parse a document from raw PDF bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < 8 || !data.starts_with(b"%PDF-") {
            return Err(ExtractError::UnsupportedFormat(
                "invalid PDF header".to_string(),
            ));
        }

        let inner = lopdf::Document::load_mem(data)
            .map_err(|e| ExtractError::UnsupportedFormat(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.inner.get_pages().len()
    }

    /// Extract the raw text of one page, identified by zero-based index.
    ///
    /// Text is produced on demand and never cached. lopdf numbers pages
    /// from 1; the conversion happens here and nowhere else.
    pub fn page_text(&self, index: usize) -> Result<String> {
        let page_count = self.page_count();
        if index >= page_count {
            return Err(ExtractError::PageOutOfRange { index, page_count });
        }

        self.inner
            .extract_text(&[index as u32 + 1])
            .map_err(|e| ExtractError::TextExtraction {
                index,
                reason: e.to_string(),
            })
    }
}
