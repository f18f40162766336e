//! The page-range extraction loop.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{ExtractError, Result};

/// Text extracted from a single page.
///
/// `page_index` is the zero-based index inside the document;
/// `display_page` is the 1-based number a reader would use. The serde
/// rename pins the JSON keys to `pageIndex`, `displayPage` and `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageText {
    pub page_index: usize,
    pub display_page: usize,
    pub text: String,
}

/// Extract text from every page in `pages`, in ascending index order.
///
/// The range is zero-based and half-open. An empty range is a valid
/// empty result and short-circuits before any bounds check. A non-empty
/// range is validated against the page count up front, and a failure on
/// any single page aborts the whole result; there is no partial output.
pub fn extract_range(doc: &Document, pages: Range<usize>) -> Result<Vec<PageText>> {
    if pages.start > pages.end {
        return Err(ExtractError::InvalidRange {
            start: pages.start,
            end: pages.end,
        });
    }
    if pages.is_empty() {
        return Ok(Vec::new());
    }

    let page_count = doc.page_count();
    if pages.end > page_count {
        return Err(ExtractError::PageOutOfRange {
            index: pages.end - 1,
            page_count,
        });
    }

    pages
        .map(|index| {
            let text = doc.page_text(index)?;
            Ok(PageText {
                page_index: index,
                display_page: index + 1,
                text,
            })
        })
        .collect()
}
