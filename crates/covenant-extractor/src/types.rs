//! Request and response types for extraction

use covenant_domain::{Obligation, RiskLevel, RiskSummary};
use serde::{Deserialize, Serialize};

/// A structurally valid obligation as returned by the model, before
/// post-processing.
///
/// All five fields survived response validation: present, well-typed,
/// risk level one of the three allowed spellings, due date normalized.
/// Party-name normalization, text cleanup, and the confidence placeholder
/// are applied later by the orchestrator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObligationCandidate {
    /// Obligation text as returned by the model
    pub obligation: String,

    /// Responsible party as returned by the model
    pub responsible_party: String,

    /// Due date, already normalized ("Ongoing" canonicalized)
    pub due_date: String,

    /// Risk classification (strictly one of Low/Medium/High)
    pub risk_level: RiskLevel,

    /// One-line summary as returned by the model
    pub summary: String,
}

impl ObligationCandidate {
    /// Check the structural constraints serde cannot express.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.obligation.trim().is_empty() {
            return Err("obligation is empty".to_string());
        }
        if self.summary.trim().is_empty() {
            return Err("summary is empty".to_string());
        }
        Ok(())
    }
}

/// Result envelope for one extraction request.
///
/// Created fresh per request and never persisted. Either wholly successful
/// (possibly with zero obligations after post-processing drops) or wholly
/// failed with a human-readable `error`, never a mix.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Whether the request succeeded end to end
    pub success: bool,

    /// Validated, post-processed obligations in model order
    pub obligations: Vec<Obligation>,

    /// Always equal to `obligations.len()`
    pub total_obligations: usize,

    /// Which provider produced the result; present only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_used: Option<String>,

    /// Which text-acquisition strategy succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_used: Option<String>,

    /// Character count of the extracted contract text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_length: Option<usize>,

    /// Risk counts and percentages across `obligations`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_summary: Option<RiskSummary>,

    /// Human-readable cause; present only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Build the failure branch of the envelope.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            obligations: Vec::new(),
            total_obligations: 0,
            api_used: None,
            parser_used: None,
            contract_length: None,
            risk_summary: None,
            error: Some(error.into()),
        }
    }

    /// Obligations at a given risk level, for display filtering.
    pub fn obligations_at(&self, level: RiskLevel) -> impl Iterator<Item = &Obligation> {
        self.obligations
            .iter()
            .filter(move |o| o.risk_level == level)
    }
}

/// Per-provider availability, in fallback order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiStatus {
    /// Preferred provider (OpenAI) configured
    pub primary_available: bool,

    /// Fallback provider (Gemini) configured
    pub secondary_available: bool,

    /// At least one provider configured; gates whether the pipeline is
    /// operable at all
    pub any_available: bool,
}

/// System-readiness introspection for callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemStatus {
    /// Provider availability
    pub apis: ApiStatus,

    /// Document text extraction requires no credentials
    pub document_parser_available: bool,

    /// Whether an extraction request can be served
    pub system_ready: bool,
}
