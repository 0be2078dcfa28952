//! LLM Provider Gateway with ordered dual-provider fallback
//!
//! Two independently optional provider slots tried in fixed preference
//! order (OpenAI, then Gemini). A slot only counts as successful when its
//! raw response survives the response validator: a transport-level success
//! that yields no parseable obligations triggers fallback exactly as a
//! network error does.

use crate::config::Settings;
use crate::parser::parse_llm_response;
use crate::prompt;
use crate::types::{ApiStatus, ObligationCandidate};
use covenant_domain::CompletionProvider;
use covenant_llm::{GeminiProvider, OpenAiProvider};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Errors terminal to one gateway call
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Neither provider slot is configured
    #[error("no LLM provider is configured")]
    NotConfigured,

    /// Every configured provider failed or returned nothing usable
    #[error("all LLM providers failed to extract obligations: {0}")]
    AllProvidersFailed(String),
}

/// Gateway over two optional provider slots.
///
/// Generic over the provider types so tests can inject mocks; production
/// code uses the defaults. Fallback is an ordered iteration over the two
/// slots, not dynamic dispatch.
pub struct LlmGateway<A = OpenAiProvider, B = GeminiProvider> {
    primary: Option<A>,
    secondary: Option<B>,
    request_timeout: Duration,
}

impl LlmGateway<OpenAiProvider, GeminiProvider> {
    /// Wire the production providers from settings. A missing credential
    /// leaves that slot empty.
    pub fn from_settings(settings: &Settings) -> Self {
        let primary = settings.openai_api_key.as_ref().map(|key| {
            info!("OpenAI provider configured (model {})", settings.openai_model);
            OpenAiProvider::new(
                key,
                &settings.openai_model,
                settings.max_tokens,
                settings.temperature,
            )
        });

        let secondary = settings.gemini_api_key.as_ref().map(|key| {
            info!("Gemini provider configured (model {})", settings.gemini_model);
            GeminiProvider::new(
                key,
                &settings.gemini_model,
                settings.max_tokens,
                settings.temperature,
            )
        });

        Self::new(primary, secondary, settings.request_timeout())
    }
}

impl<A, B> LlmGateway<A, B>
where
    A: CompletionProvider,
    B: CompletionProvider,
{
    /// Create a gateway from explicit slots
    pub fn new(primary: Option<A>, secondary: Option<B>, request_timeout: Duration) -> Self {
        Self {
            primary,
            secondary,
            request_timeout,
        }
    }

    /// Per-provider availability
    pub fn status(&self) -> ApiStatus {
        let primary_available = self.primary.is_some();
        let secondary_available = self.secondary.is_some();
        ApiStatus {
            primary_available,
            secondary_available,
            any_available: primary_available || secondary_available,
        }
    }

    /// Extract obligations from contract text via the primary prompt,
    /// returning the surviving candidates and the name of the provider
    /// that produced them.
    pub async fn extract_obligations(
        &self,
        contract_text: &str,
    ) -> Result<(Vec<ObligationCandidate>, &'static str), GatewayError> {
        self.try_providers(&prompt::extraction_prompt(contract_text))
            .await
    }

    /// Degraded-mode extraction with the shorter template. Not part of the
    /// primary path; an explicit lighter-weight retry for callers that
    /// already exhausted [`extract_obligations`](Self::extract_obligations).
    /// Absorbs all errors into `None`.
    pub async fn extract_with_fallback_prompt(
        &self,
        contract_text: &str,
    ) -> Option<(Vec<ObligationCandidate>, &'static str)> {
        self.try_providers(&prompt::fallback_prompt(contract_text))
            .await
            .ok()
    }

    async fn try_providers(
        &self,
        prompt: &str,
    ) -> Result<(Vec<ObligationCandidate>, &'static str), GatewayError> {
        if self.primary.is_none() && self.secondary.is_none() {
            return Err(GatewayError::NotConfigured);
        }

        let mut reasons = Vec::new();

        if let Some(provider) = &self.primary {
            match self.attempt(provider, prompt).await {
                Ok(obligations) => return Ok((obligations, provider.name())),
                Err(reason) => {
                    warn!("{} extraction failed: {}", provider.name(), reason);
                    reasons.push(format!("{}: {}", provider.name(), reason));
                }
            }
        }

        if let Some(provider) = &self.secondary {
            match self.attempt(provider, prompt).await {
                Ok(obligations) => return Ok((obligations, provider.name())),
                Err(reason) => {
                    warn!("{} extraction failed: {}", provider.name(), reason);
                    reasons.push(format!("{}: {}", provider.name(), reason));
                }
            }
        }

        Err(GatewayError::AllProvidersFailed(reasons.join("; ")))
    }

    /// One bounded provider attempt: complete, then validate. Both a
    /// transport failure and an unvalidatable response fail the attempt.
    async fn attempt<P: CompletionProvider>(
        &self,
        provider: &P,
        prompt: &str,
    ) -> Result<Vec<ObligationCandidate>, String> {
        let response = timeout(self.request_timeout, provider.complete(prompt))
            .await
            .map_err(|_| {
                format!(
                    "timed out after {}s",
                    self.request_timeout.as_secs()
                )
            })?
            .map_err(|e| e.to_string())?;

        debug!(
            provider = provider.name(),
            chars = response.len(),
            "provider response received"
        );

        parse_llm_response(&response)
            .ok_or_else(|| "returned no parseable obligations".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_llm::MockProvider;

    const VALID_RESPONSE: &str = r#"[{
        "obligation": "Vendor shall deliver monthly status reports",
        "responsibleParty": "Vendor",
        "dueDate": "Ongoing",
        "riskLevel": "Low",
        "summary": "Vendor reports monthly."
    }]"#;

    fn gateway(
        primary: Option<MockProvider>,
        secondary: Option<MockProvider>,
    ) -> LlmGateway<MockProvider, MockProvider> {
        LlmGateway::new(primary, secondary, Duration::from_secs(5))
    }

    #[test]
    fn test_status_flags() {
        let status = gateway(Some(MockProvider::new("a", "[]")), None).status();
        assert!(status.primary_available);
        assert!(!status.secondary_available);
        assert!(status.any_available);

        let status = gateway(None, None).status();
        assert!(!status.any_available);
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_errors() {
        let result = gateway(None, None).extract_obligations("text").await;
        assert!(matches!(result, Err(GatewayError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_primary_success_skips_secondary() {
        let primary = MockProvider::new("OpenAI GPT-4", VALID_RESPONSE);
        let secondary = MockProvider::new("Google Gemini", VALID_RESPONSE);
        let gateway = gateway(Some(primary), Some(secondary.clone()));

        let (obligations, api_used) = gateway.extract_obligations("text").await.unwrap();
        assert_eq!(obligations.len(), 1);
        assert_eq!(api_used, "OpenAI GPT-4");
        assert_eq!(secondary.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_falls_back() {
        let primary = MockProvider::failing("OpenAI GPT-4", "connection refused");
        let secondary = MockProvider::new("Google Gemini", VALID_RESPONSE);
        let gateway = gateway(Some(primary.clone()), Some(secondary));

        let (_, api_used) = gateway.extract_obligations("text").await.unwrap();
        assert_eq!(api_used, "Google Gemini");
        assert_eq!(primary.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unvalidatable_response_falls_back() {
        // Transport succeeds but every element carries a bad risk level;
        // that must count as a failed attempt.
        let bad = r#"[{
            "obligation": "Pay the invoice",
            "responsibleParty": "Client",
            "dueDate": "2026-01-31",
            "riskLevel": "Severe",
            "summary": "Client pays."
        }]"#;
        let primary = MockProvider::new("OpenAI GPT-4", bad);
        let secondary = MockProvider::new("Google Gemini", VALID_RESPONSE);
        let gateway = gateway(Some(primary.clone()), Some(secondary.clone()));

        let (_, api_used) = gateway.extract_obligations("text").await.unwrap();
        assert_eq!(api_used, "Google Gemini");
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 1);
    }

    #[tokio::test]
    async fn test_all_providers_failing_aggregates_reasons() {
        let primary = MockProvider::failing("OpenAI GPT-4", "rate limited");
        let secondary = MockProvider::failing("Google Gemini", "quota exceeded");
        let gateway = gateway(Some(primary), Some(secondary));

        let err = gateway.extract_obligations("text").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("OpenAI GPT-4"));
        assert!(message.contains("Google Gemini"));
    }

    #[tokio::test]
    async fn test_fallback_prompt_mode_absorbs_errors() {
        let primary = MockProvider::failing("OpenAI GPT-4", "down");
        let gateway = gateway(Some(primary), None);
        assert!(gateway.extract_with_fallback_prompt("text").await.is_none());

        let primary = MockProvider::new("OpenAI GPT-4", VALID_RESPONSE);
        let gateway = self::gateway(Some(primary), None);
        let (obligations, _) = gateway.extract_with_fallback_prompt("text").await.unwrap();
        assert_eq!(obligations.len(), 1);
    }
}
