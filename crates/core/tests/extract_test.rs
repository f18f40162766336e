//! Tests for page-range extraction:
//! - extract_range() - one record per page, ascending order
//! - zero-based indexing and one-based display numbering
//! - empty, inverted and out-of-bounds ranges

use once_cell::sync::Lazy;
use pagetext_core::document::Document;
use pagetext_core::error::ExtractError;
use pagetext_core::extract::extract_range;

fn build_pdf(texts: &[&str]) -> Vec<u8> {
    let page_count = texts.len();
    let mut out = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets: Vec<usize> = Vec::new();
    let push_obj = |buf: &mut Vec<u8>, obj: String, offsets: &mut Vec<usize>| {
        offsets.push(buf.len());
        buf.extend_from_slice(obj.as_bytes());
    };

    push_obj(
        &mut out,
        "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n".to_string(),
        &mut offsets,
    );

    let kids: String = (0..page_count)
        .map(|i| format!("{} 0 R", 4 + i))
        .collect::<Vec<_>>()
        .join(" ");
    push_obj(
        &mut out,
        format!(
            "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
            kids, page_count
        ),
        &mut offsets,
    );

    push_obj(
        &mut out,
        "3 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n".to_string(),
        &mut offsets,
    );

    for i in 0..page_count {
        let page_id = 4 + i;
        let contents_id = 4 + page_count + i;
        push_obj(
            &mut out,
            format!(
                "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>\nendobj\n",
                page_id, contents_id
            ),
            &mut offsets,
        );
    }

    for (i, text) in texts.iter().enumerate() {
        let contents_id = 4 + page_count + i;
        let stream = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text);
        push_obj(
            &mut out,
            format!(
                "{} 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
                contents_id,
                stream.len(),
                stream
            ),
            &mut offsets,
        );
    }

    let xref_pos = out.len();
    let obj_count = offsets.len();
    out.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", obj_count + 1).as_bytes());
    for offset in offsets {
        out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    out.extend_from_slice(b"trailer\n<< /Size ");
    out.extend_from_slice((obj_count + 1).to_string().as_bytes());
    out.extend_from_slice(b" /Root 1 0 R >>\nstartxref\n");
    out.extend_from_slice(xref_pos.to_string().as_bytes());
    out.extend_from_slice(b"\n%%EOF");

    out
}

/// A 13 page document, the shape of a short book: front matter on the
/// first pages, chapter one starting at page index 8.
static THIRTEEN_PAGES: Lazy<Vec<u8>> = Lazy::new(|| {
    let texts: Vec<String> = (1..=13).map(|n| format!("Page {}", n)).collect();
    let refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
    build_pdf(&refs)
});

fn thirteen_page_doc() -> Document {
    Document::from_bytes(&THIRTEEN_PAGES).unwrap()
}

// ============================================================================
// Range extraction
// ============================================================================

#[test]
fn test_range_yields_one_record_per_page() {
    let doc = thirteen_page_doc();
    let pages = extract_range(&doc, 8..13).unwrap();
    assert_eq!(pages.len(), 5);
}

#[test]
fn test_records_are_ascending() {
    let doc = thirteen_page_doc();
    let pages = extract_range(&doc, 8..13).unwrap();

    let indices: Vec<usize> = pages.iter().map(|p| p.page_index).collect();
    assert_eq!(indices, vec![8, 9, 10, 11, 12]);
}

#[test]
fn test_display_page_is_index_plus_one() {
    let doc = thirteen_page_doc();
    let pages = extract_range(&doc, 8..13).unwrap();

    for page in &pages {
        assert_eq!(page.display_page, page.page_index + 1);
    }
    let displays: Vec<usize> = pages.iter().map(|p| p.display_page).collect();
    assert_eq!(displays, vec![9, 10, 11, 12, 13]);
}

#[test]
fn test_record_text_matches_its_page() {
    let doc = thirteen_page_doc();
    let pages = extract_range(&doc, 8..13).unwrap();

    assert!(pages[0].text.contains("Page 9"));
    assert!(pages[4].text.contains("Page 13"));
}

#[test]
fn test_whole_document_range() {
    let doc = thirteen_page_doc();
    let pages = extract_range(&doc, 0..13).unwrap();
    assert_eq!(pages.len(), 13);
    assert_eq!(pages[0].page_index, 0);
    assert_eq!(pages[12].display_page, 13);
}

#[test]
fn test_single_page_range() {
    let doc = thirteen_page_doc();
    let pages = extract_range(&doc, 12..13).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].page_index, 12);
    assert!(pages[0].text.contains("Page 13"));
}

#[test]
fn test_extraction_is_deterministic() {
    let doc = thirteen_page_doc();
    let first = extract_range(&doc, 8..13).unwrap();
    let second = extract_range(&doc, 8..13).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Empty and invalid ranges
// ============================================================================

#[test]
fn test_empty_range_is_ok() {
    let doc = thirteen_page_doc();
    let pages = extract_range(&doc, 5..5).unwrap();
    assert!(pages.is_empty());
}

#[test]
fn test_empty_range_beyond_document_is_ok() {
    // start == end never touches the document, even past its end
    let doc = thirteen_page_doc();
    let pages = extract_range(&doc, 50..50).unwrap();
    assert!(pages.is_empty());
}

#[test]
fn test_inverted_range_is_rejected() {
    let doc = thirteen_page_doc();
    let result = extract_range(&doc, 7..3);
    assert!(matches!(
        result,
        Err(ExtractError::InvalidRange { start: 7, end: 3 })
    ));
}

#[test]
fn test_range_past_end_is_rejected() {
    let doc = thirteen_page_doc();
    let result = extract_range(&doc, 0..20);
    assert!(matches!(
        result,
        Err(ExtractError::PageOutOfRange {
            index: 19,
            page_count: 13
        })
    ));
}

#[test]
fn test_range_past_end_reports_range_message() {
    let doc = thirteen_page_doc();
    let err = extract_range(&doc, 0..20).unwrap_err();
    assert_eq!(
        err.to_string(),
        "page index 19 out of range for document with 13 pages"
    );
}
