//! Output rendering for extracted pages.
//!
//! One renderer per output shape: flat text, flat text with page
//! markers, and a structured JSON array. Rendering is pure; writing the
//! result anywhere is the caller's business.

use crate::error::Result;
use crate::extract::PageText;

/// Serialization mode for an extraction result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pages concatenated, a newline after each, no markers.
    #[default]
    Text,
    /// A `--- Page <n> ---` line (1-based) before each page.
    Markers,
    /// Pretty-printed JSON array of per-page records.
    Json,
}

/// Render extracted pages into the final output string.
///
/// JSON output is pretty-printed with two-space indentation and leaves
/// non-ASCII characters unescaped.
pub fn render(pages: &[PageText], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(flat_text(pages)),
        OutputFormat::Markers => Ok(marked_text(pages)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(pages)?),
    }
}

fn flat_text(pages: &[PageText]) -> String {
    let mut out = String::new();
    for page in pages {
        out.push_str(&page.text);
        out.push('\n');
    }
    out
}

fn marked_text(pages: &[PageText]) -> String {
    let mut out = String::new();
    for page in pages {
        out.push_str(&format!("\n--- Page {} ---\n", page.display_page));
        out.push_str(&page.text);
    }
    out
}
