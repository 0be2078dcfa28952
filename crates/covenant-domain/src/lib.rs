//! Covenant Domain Layer
//!
//! Core data model for contract obligation extraction. This crate defines
//! the canonical [`Obligation`] record, the three-value [`RiskLevel`]
//! classification, the normalization rules applied to model output, and the
//! [`traits::CompletionProvider`] seam implemented by the LLM provider layer.
//!
//! ## Key Concepts
//!
//! - **Obligation**: a single contractual duty with responsible party,
//!   due date, risk level, and plain-English summary
//! - **Risk level**: Low / Medium / High, assigned per obligation by the LLM
//!   and rejected outright for any other spelling
//! - **Normalization**: fixed party-name synonym table, due-date handling,
//!   and text cleanup that every record passes through before it reaches a
//!   caller

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod normalize;
pub mod obligation;
pub mod traits;

// Re-exports for convenience
pub use obligation::{Obligation, RiskBreakdown, RiskLevel, RiskSummary};
pub use traits::CompletionProvider;

/// Placeholder confidence attached to every obligation during
/// post-processing. The upstream design hardcodes this rather than deriving
/// a per-record score from the model.
pub const CONFIDENCE_PLACEHOLDER: f64 = 0.85;
