//! Job configuration and the end-to-end extraction pipeline.
//!
//! An [`ExtractionJob`] replaces the hardcoded path/range/output
//! constants of ad-hoc extraction scripts with an explicit structure
//! handed over at the call boundary.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::Result;
use crate::extract::extract_range;
use crate::render::{OutputFormat, render};

/// Configuration for one extraction run.
///
/// # Example
/// ```ignore
/// use pagetext_core::{ExtractionJob, OutputFormat};
///
/// let summary = ExtractionJob::new("the_martian.pdf", "chapter1_pages_raw.json")
///     .pages(8..13)
///     .format(OutputFormat::Json)
///     .run()?;
/// ```
#[derive(Debug, Clone)]
pub struct ExtractionJob {
    /// Path of the document to read.
    pub document_path: PathBuf,

    /// First page to extract, zero-based.
    pub start_page: usize,

    /// End of the range, half-open. `None` means through the last page.
    pub end_page: Option<usize>,

    /// Path the rendered output is written to.
    pub output_path: PathBuf,

    /// Serialization mode.
    pub format: OutputFormat,
}

/// What a completed job wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSummary {
    /// Number of pages extracted.
    pub pages: usize,
    /// Size of the output file in bytes.
    pub bytes: usize,
}

impl ExtractionJob {
    /// Create a job extracting every page as flat text.
    pub fn new(document_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Self {
        Self {
            document_path: document_path.as_ref().to_path_buf(),
            start_page: 0,
            end_page: None,
            output_path: output_path.as_ref().to_path_buf(),
            format: OutputFormat::default(),
        }
    }

    /// Restrict the job to a zero-based, half-open page range.
    pub fn pages(mut self, range: Range<usize>) -> Self {
        self.start_page = range.start;
        self.end_page = Some(range.end);
        self
    }

    /// Select the output serialization.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Run the pipeline: open, extract, render, write.
    ///
    /// Accumulation fully precedes writing: the output file is created
    /// only once the whole range has extracted and rendered, so a
    /// failure on any page leaves no file behind. Rerunning overwrites
    /// prior output unconditionally.
    pub fn run(&self) -> Result<JobSummary> {
        let doc = Document::open(&self.document_path)?;
        let end = self.end_page.unwrap_or_else(|| doc.page_count());
        let pages = extract_range(&doc, self.start_page..end)?;
        let rendered = render(&pages, self.format)?;
        fs::write(&self.output_path, &rendered)?;

        Ok(JobSummary {
            pages: pages.len(),
            bytes: rendered.len(),
        })
    }
}
