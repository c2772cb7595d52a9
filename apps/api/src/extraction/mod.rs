//! Text Extractor — PDF bytes in, one page-ordered text blob out.
//!
//! Thin wrapper over `pdf-extract`. Whitespace runs (including page breaks)
//! collapse to single spaces so the result matches what the browser client sends.

pub mod handlers;

use thiserror::Error;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("File is not a PDF")]
    NotPdf,

    #[error("Could not read PDF: {0}")]
    Unreadable(String),
}

/// Returns true if `bytes` start with the PDF magic header.
pub fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    if !is_pdf(bytes) {
        return Err(ExtractError::NotPdf);
    }

    // pdf-extract panics on some malformed documents instead of returning an error.
    let raw = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ExtractError::Unreadable("malformed document".to_string()))?
        .map_err(|e| ExtractError::Unreadable(e.to_string()))?;

    Ok(collapse_whitespace(&raw))
}

/// Joins whitespace-separated items with single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TWO_PAGE_PDF;

    #[test]
    fn test_extract_joins_pages_in_order_with_single_spaces() {
        let text = extract_text(TWO_PAGE_PDF).unwrap();
        assert_eq!(text, "Alpha Bravo Charlie Delta");
    }

    #[test]
    fn test_collapse_whitespace_joins_items_with_single_spaces() {
        let raw = "\n\nJane Doe\t\tEngineer\n\n\u{c}Page two  text \n";
        assert_eq!(collapse_whitespace(raw), "Jane Doe Engineer Page two text");
    }

    #[test]
    fn test_collapse_whitespace_of_blank_is_empty() {
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_is_pdf_checks_magic() {
        assert!(is_pdf(b"%PDF-1.7\n..."));
        assert!(!is_pdf(b"PK\x03\x04"));
        assert!(!is_pdf(b""));
    }

    #[test]
    fn test_extract_rejects_non_pdf_bytes() {
        assert!(matches!(
            extract_text(b"hello, not a pdf"),
            Err(ExtractError::NotPdf)
        ));
    }

    #[test]
    fn test_extract_rejects_corrupt_pdf() {
        assert!(matches!(
            extract_text(b"%PDF-1.4\nthis is not a real document"),
            Err(ExtractError::Unreadable(_))
        ));
    }
}
