//! Covenant Document Layer
//!
//! Converts raw uploaded bytes (PDF or plain text) into normalized contract
//! text. PDFs go through two interchangeable extraction strategies in fixed
//! preference order: page-by-page extraction with `lopdf`, then the
//! layout-aware `pdf-extract` fallback. A strategy's output is accepted only
//! when it clears a minimum-content threshold; if neither clears it, the
//! request fails with [`DocumentError::NoText`].
//!
//! Plain text never fails: bytes are decoded as UTF-8 with undecodable
//! sequences replaced, even if the result is empty.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cleanup;
mod pdf;

pub use pdf::{pdf_info, PdfInfo, PdfMetadata};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during document text extraction
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Neither PDF extraction strategy produced enough text
    #[error("could not extract text from PDF: {0}")]
    NoText(String),
}

/// Declared type of an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// PDF document
    Pdf,
    /// Plain text
    Txt,
}

impl FileType {
    /// Infer the file type from a file extension, with or without the
    /// leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        extension.trim_start_matches('.').parse().ok()
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(FileType::Pdf),
            "txt" => Ok(FileType::Txt),
            other => Err(format!("unsupported file type: {}", other)),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileType::Pdf => f.write_str("pdf"),
            FileType::Txt => f.write_str("txt"),
        }
    }
}

/// Which text-acquisition strategy produced the contract text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserKind {
    /// Primary PDF strategy: page-by-page extraction via lopdf
    Lopdf,
    /// Fallback PDF strategy: layout-aware extraction via pdf-extract
    PdfExtract,
    /// Plain-text decoding
    TextDecoder,
}

impl ParserKind {
    /// Strategy name as reported in the result envelope
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserKind::Lopdf => "lopdf",
            ParserKind::PdfExtract => "pdf-extract",
            ParserKind::TextDecoder => "text_decoder",
        }
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract contract text from raw file bytes.
///
/// Returns the normalized text and the strategy that produced it. Plain
/// text always succeeds; PDF extraction fails only when both strategies
/// miss the minimum-content threshold.
pub fn extract_text(
    bytes: &[u8],
    file_type: FileType,
) -> Result<(String, ParserKind), DocumentError> {
    match file_type {
        FileType::Pdf => pdf::extract_pdf(bytes),
        FileType::Txt => {
            let text = String::from_utf8_lossy(bytes).into_owned();
            debug!(chars = text.len(), "decoded plain-text upload");
            Ok((text, ParserKind::TextDecoder))
        }
    }
}
