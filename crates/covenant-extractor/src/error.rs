//! Error types for the extraction pipeline

use crate::gateway::GatewayError;
use covenant_document::DocumentError;
use thiserror::Error;

/// Fatal request-level errors.
///
/// Only these four categories surface to a caller (inside the envelope's
/// `success = false` branch); everything else is absorbed by fallback or
/// per-record drops.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// File type other than pdf/txt
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// No text-extraction strategy cleared the minimum-content threshold
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Extracted text failed the validity gate; checked before any
    /// provider call to avoid wasting a paid request
    #[error("contract text is too short or invalid")]
    TextTooShort,

    /// No provider configured, or all configured providers exhausted
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
