//! Dual-strategy PDF text extraction and best-effort metadata inspection

use crate::cleanup::{clean_extracted_text, non_whitespace_len};
use crate::{DocumentError, ParserKind};
use lopdf::Document;
use serde::Serialize;
use tracing::{debug, warn};

/// A strategy's output counts only above this many non-whitespace
/// characters; anything less is treated as a failed extraction.
const MIN_TEXT_LEN: usize = 100;

type Strategy = fn(&[u8]) -> Result<String, String>;

/// Extract text from PDF bytes, primary strategy first.
pub(crate) fn extract_pdf(bytes: &[u8]) -> Result<(String, ParserKind), DocumentError> {
    run_strategies(
        bytes,
        &[
            (ParserKind::Lopdf, extract_with_lopdf as Strategy),
            (ParserKind::PdfExtract, extract_with_pdf_extract as Strategy),
        ],
    )
}

/// Try each strategy in order, accepting the first whose output clears the
/// minimum-content threshold. Below-threshold output counts as a failure.
fn run_strategies(
    bytes: &[u8],
    strategies: &[(ParserKind, Strategy)],
) -> Result<(String, ParserKind), DocumentError> {
    let mut reasons = Vec::new();

    for (kind, strategy) in strategies {
        match strategy(bytes) {
            Ok(text) if meets_threshold(&text) => {
                debug!(
                    strategy = kind.as_str(),
                    chars = text.len(),
                    "PDF extraction accepted"
                );
                return Ok((text, *kind));
            }
            Ok(text) => {
                warn!(
                    strategy = kind.as_str(),
                    chars = non_whitespace_len(&text),
                    "PDF extraction below minimum-content threshold"
                );
                reasons.push(format!("{} output below threshold", kind.as_str()));
            }
            Err(reason) => {
                warn!("{} extraction failed: {}", kind.as_str(), reason);
                reasons.push(format!("{}: {}", kind.as_str(), reason));
            }
        }
    }

    Err(DocumentError::NoText(reasons.join("; ")))
}

fn meets_threshold(text: &str) -> bool {
    non_whitespace_len(text) > MIN_TEXT_LEN
}

/// Primary strategy: load the document model and extract page by page in
/// page order. Any page failure fails the whole strategy and defers to the
/// fallback.
fn extract_with_lopdf(bytes: &[u8]) -> Result<String, String> {
    let doc = Document::load_mem(bytes).map_err(|e| format!("load failed: {}", e))?;

    let mut parts = Vec::new();
    for (page_num, _object_id) in doc.get_pages() {
        let text = doc
            .extract_text(&[page_num])
            .map_err(|e| format!("page {}: {}", page_num, e))?;
        parts.push(text);
    }

    Ok(clean_extracted_text(&parts.join("\n")))
}

/// Fallback strategy: layout-aware whole-document extraction. Page
/// boundaries are not preserved, which is fine for obligation extraction.
fn extract_with_pdf_extract(bytes: &[u8]) -> Result<String, String> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| e.to_string())?;
    Ok(clean_extracted_text(&text))
}

/// Embedded document metadata, read from the PDF info dictionary
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PdfMetadata {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Keywords, split on commas/semicolons
    pub keywords: Vec<String>,
    /// Creating application
    pub creator: Option<String>,
    /// Producing application
    pub producer: Option<String>,
}

/// Basic information about an uploaded PDF
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PdfInfo {
    /// Number of pages
    pub page_count: usize,
    /// Upload size in bytes
    pub file_size: usize,
    /// Embedded metadata, best-effort
    pub metadata: PdfMetadata,
}

/// Inspect PDF bytes for page count, size, and embedded metadata.
///
/// Best-effort: returns zeros and empty metadata when the document cannot
/// be read; never errors.
pub fn pdf_info(bytes: &[u8]) -> PdfInfo {
    let doc = match Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("could not read PDF for inspection: {}", e);
            return PdfInfo {
                page_count: 0,
                file_size: bytes.len(),
                metadata: PdfMetadata::default(),
            };
        }
    };

    PdfInfo {
        page_count: doc.get_pages().len(),
        file_size: bytes.len(),
        metadata: extract_metadata(&doc),
    }
}

fn extract_metadata(doc: &Document) -> PdfMetadata {
    let mut metadata = PdfMetadata::default();

    fn string_field(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
        dict.get(key)
            .ok()
            .and_then(|obj| obj.as_str().ok())
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .map(|s| s.to_string())
    }

    let info_dict = doc
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|obj| obj.as_reference().ok())
        .and_then(|id| doc.get_object(id).ok())
        .and_then(|obj| obj.as_dict().ok());

    if let Some(dict) = info_dict {
        metadata.title = string_field(dict, b"Title");
        metadata.author = string_field(dict, b"Author");
        metadata.subject = string_field(dict, b"Subject");
        metadata.creator = string_field(dict, b"Creator");
        metadata.producer = string_field(dict, b"Producer");
        if let Some(keywords) = string_field(dict, b"Keywords") {
            metadata.keywords = keywords
                .split([',', ';'])
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect();
        }
    }

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_rejects_short_text() {
        assert!(!meets_threshold(""));
        assert!(!meets_threshold(&"x ".repeat(50))); // 50 non-whitespace chars
        assert!(meets_threshold(&"x".repeat(101)));
    }

    #[test]
    fn test_threshold_ignores_whitespace() {
        // 100 chars of padding around 40 real characters still fails
        let padded = format!("{}{}", " ".repeat(100), "y".repeat(40));
        assert!(!meets_threshold(&padded));
    }

    #[test]
    fn test_pdf_info_on_garbage_never_errors() {
        let info = pdf_info(b"definitely not a pdf");
        assert_eq!(info.page_count, 0);
        assert_eq!(info.file_size, 20);
        assert_eq!(info.metadata, PdfMetadata::default());
    }

    #[test]
    fn test_extract_pdf_on_garbage_reports_both_strategies() {
        let err = extract_pdf(b"garbage").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("lopdf"));
        assert!(message.contains("pdf-extract"));
    }

    fn short_strategy(_: &[u8]) -> Result<String, String> {
        Ok("x".repeat(40))
    }

    fn long_strategy(_: &[u8]) -> Result<String, String> {
        Ok("y".repeat(2000))
    }

    fn failing_strategy(_: &[u8]) -> Result<String, String> {
        Err("parse error".to_string())
    }

    #[test]
    fn test_below_threshold_primary_defers_to_fallback() {
        let (text, kind) = run_strategies(
            b"",
            &[
                (ParserKind::Lopdf, short_strategy as Strategy),
                (ParserKind::PdfExtract, long_strategy as Strategy),
            ],
        )
        .unwrap();
        assert_eq!(kind, ParserKind::PdfExtract);
        assert_eq!(text.len(), 2000);
    }

    #[test]
    fn test_primary_accepted_skips_fallback() {
        let (_, kind) = run_strategies(
            b"",
            &[
                (ParserKind::Lopdf, long_strategy as Strategy),
                (ParserKind::PdfExtract, failing_strategy as Strategy),
            ],
        )
        .unwrap();
        assert_eq!(kind, ParserKind::Lopdf);
    }
}
