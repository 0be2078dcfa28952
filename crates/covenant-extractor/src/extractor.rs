//! Pipeline orchestrator
//!
//! Drives one extraction request through its stages in a fixed order, each
//! stage gating the next. Any stage failure aborts the request; the error
//! lands in the envelope's failure branch rather than propagating out.

use crate::config::Settings;
use crate::error::ExtractorError;
use crate::gateway::{GatewayError, LlmGateway};
use crate::types::{ExtractionResult, ObligationCandidate, SystemStatus};
use covenant_document::{extract_text, FileType};
use covenant_domain::normalize::{clean_obligation_text, clean_summary_text, normalize_party_name};
use covenant_domain::{Obligation, RiskSummary, CONFIDENCE_PLACEHOLDER};
use covenant_llm::{GeminiProvider, OpenAiProvider};
use tracing::{info, warn};

/// Minimum non-whitespace characters for text to count as a contract
const MIN_CONTRACT_CHARS: usize = 50;

/// Minimum whitespace-separated tokens for text to count as a contract
const MIN_CONTRACT_TOKENS: usize = 20;

/// The obligation-extraction pipeline.
///
/// Stateless across requests: holds only configuration and the provider
/// gateway, both fixed at construction.
pub struct ObligationExtractor<A = OpenAiProvider, B = GeminiProvider> {
    gateway: LlmGateway<A, B>,
    settings: Settings,
}

impl ObligationExtractor<OpenAiProvider, GeminiProvider> {
    /// Build an extractor with production providers wired from settings.
    pub fn new(settings: Settings) -> Self {
        let gateway = LlmGateway::from_settings(&settings);
        Self { gateway, settings }
    }

    /// Build an extractor configured entirely from the process environment.
    pub fn from_env() -> Self {
        Self::new(Settings::from_env())
    }
}

impl<A, B> ObligationExtractor<A, B>
where
    A: covenant_domain::CompletionProvider,
    B: covenant_domain::CompletionProvider,
{
    /// Build an extractor around an explicit gateway, for tests and
    /// alternative provider wiring.
    pub fn with_gateway(gateway: LlmGateway<A, B>, settings: Settings) -> Self {
        Self { gateway, settings }
    }

    /// Configuration this extractor was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Readiness introspection: provider availability plus overall
    /// operability. Text extraction needs no credentials, so readiness
    /// reduces to having at least one provider.
    pub fn system_status(&self) -> SystemStatus {
        let apis = self.gateway.status();
        SystemStatus {
            apis,
            document_parser_available: true,
            system_ready: apis.any_available,
        }
    }

    /// Run one contract through the full pipeline.
    ///
    /// Infallible by construction: every failure is folded into the
    /// envelope's `success = false` branch with a human-readable cause.
    pub async fn process_contract(
        &self,
        file_content: &[u8],
        declared_type: &str,
    ) -> ExtractionResult {
        match self.run_pipeline(file_content, declared_type).await {
            Ok(result) => result,
            Err(e) => {
                warn!("contract processing failed: {}", e);
                ExtractionResult::failure(e.to_string())
            }
        }
    }

    async fn run_pipeline(
        &self,
        file_content: &[u8],
        declared_type: &str,
    ) -> Result<ExtractionResult, ExtractorError> {
        // Readiness pre-flight: fail before doing any document work when
        // no provider could possibly serve the request.
        if !self.gateway.status().any_available {
            return Err(GatewayError::NotConfigured.into());
        }

        let file_type: FileType = declared_type
            .parse()
            .map_err(|_| ExtractorError::UnsupportedFileType(declared_type.to_string()))?;

        let (contract_text, parser_used) = extract_text(file_content, file_type)?;
        info!(
            parser = parser_used.as_str(),
            chars = contract_text.len(),
            "contract text acquired"
        );

        if !validate_contract_text(&contract_text) {
            return Err(ExtractorError::TextTooShort);
        }

        let (candidates, api_used) = self.gateway.extract_obligations(&contract_text).await?;
        let obligations = post_process(candidates);
        info!(
            api = api_used,
            count = obligations.len(),
            "obligations extracted"
        );

        let risk_summary = RiskSummary::tally(&obligations);
        Ok(ExtractionResult {
            success: true,
            total_obligations: obligations.len(),
            obligations,
            api_used: Some(api_used.to_string()),
            parser_used: Some(parser_used.as_str().to_string()),
            contract_length: Some(contract_text.len()),
            risk_summary: Some(risk_summary),
            error: None,
        })
    }
}

/// Gate on extracted text before spending a provider request: enough
/// non-whitespace characters and enough tokens to plausibly be a contract.
pub(crate) fn validate_contract_text(text: &str) -> bool {
    let chars = text.chars().filter(|c| !c.is_whitespace()).count();
    let tokens = text.split_whitespace().count();
    chars >= MIN_CONTRACT_CHARS && tokens >= MIN_CONTRACT_TOKENS
}

/// Normalize validated candidates into final obligations.
///
/// Cleans obligation and summary text, canonicalizes party names, and
/// stamps the fixed confidence placeholder. A record whose obligation text
/// becomes empty after cleanup is dropped, not failed.
pub(crate) fn post_process(candidates: Vec<ObligationCandidate>) -> Vec<Obligation> {
    let mut obligations = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let obligation_text = clean_obligation_text(&candidate.obligation);
        if obligation_text.is_empty() {
            warn!("dropping obligation with empty text after cleanup");
            continue;
        }
        obligations.push(Obligation {
            obligation: obligation_text,
            responsible_party: normalize_party_name(&candidate.responsible_party),
            due_date: candidate.due_date,
            risk_level: candidate.risk_level,
            summary: clean_summary_text(&candidate.summary),
            confidence: CONFIDENCE_PLACEHOLDER,
        });
    }
    obligations
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_domain::RiskLevel;

    fn candidate(obligation: &str, party: &str, summary: &str) -> ObligationCandidate {
        ObligationCandidate {
            obligation: obligation.to_string(),
            responsible_party: party.to_string(),
            due_date: "Ongoing".to_string(),
            risk_level: RiskLevel::Medium,
            summary: summary.to_string(),
        }
    }

    #[test]
    fn test_validate_contract_text_accepts_real_text() {
        let text = "The Vendor shall deliver all goods to the Client no later than \
                    thirty days after the effective date of this agreement, and \
                    shall maintain insurance coverage throughout the term.";
        assert!(validate_contract_text(text));
    }

    #[test]
    fn test_validate_contract_text_rejects_short_text() {
        assert!(!validate_contract_text("too short"));
        assert!(!validate_contract_text(""));
    }

    #[test]
    fn test_validate_contract_text_requires_tokens_not_just_chars() {
        // Plenty of characters but a single token.
        let text = "a".repeat(200);
        assert!(!validate_contract_text(&text));
    }

    #[test]
    fn test_post_process_normalizes_records() {
        let candidates = vec![candidate(
            "Vendor shall \u{201C}deliver\u{201D}   the goods",
            "party a",
            "Vendor delivers goods",
        )];
        let obligations = post_process(candidates);
        assert_eq!(obligations.len(), 1);
        assert_eq!(obligations[0].obligation, "Vendor shall \"deliver\" the goods");
        assert_eq!(obligations[0].responsible_party, "Party A");
        assert_eq!(obligations[0].summary, "Vendor delivers goods.");
        assert_eq!(obligations[0].confidence, CONFIDENCE_PLACEHOLDER);
    }

    #[test]
    fn test_post_process_drops_empty_after_cleanup() {
        let candidates = vec![
            candidate("   ", "Vendor", "Empty one"),
            candidate("Pay the invoice", "Client", "Client pays"),
        ];
        let obligations = post_process(candidates);
        assert_eq!(obligations.len(), 1);
        assert_eq!(obligations[0].obligation, "Pay the invoice");
    }
}
