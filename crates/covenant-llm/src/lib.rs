//! Covenant LLM Provider Layer
//!
//! Implementations of the `CompletionProvider` trait from `covenant-domain`.
//!
//! # Providers
//!
//! - `OpenAiProvider`: OpenAI chat completions (preferred for legal text)
//! - `GeminiProvider`: Google Gemini generateContent
//! - `MockProvider`: deterministic mock for testing
//!
//! Each provider sends one prompt per call with a bounded output-token
//! budget and low sampling temperature, and returns the raw text response.
//! Fallback ordering between providers is the gateway's job, not the
//! provider's.
//!
//! # Examples
//!
//! ```
//! use covenant_llm::MockProvider;
//! use covenant_domain::CompletionProvider;
//!
//! # async fn example() {
//! let provider = MockProvider::new("mock", "[]");
//! let result = provider.complete("test prompt").await.unwrap();
//! assert_eq!(result, "[]");
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;
pub mod openai;

use covenant_domain::CompletionProvider;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

/// Default timeout for provider requests (30 seconds). A hung network call
/// counts as a provider failure for fallback purposes.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// API credential rejected
    #[error("Unauthorized: credential rejected")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Deterministic provider for testing gateway and pipeline behavior.
///
/// Returns a fixed response or a scripted failure, and counts calls so
/// tests can assert whether a provider was attempted at all.
///
/// # Examples
///
/// ```
/// use covenant_llm::MockProvider;
/// use covenant_domain::CompletionProvider;
///
/// # async fn example() {
/// let provider = MockProvider::failing("mock", "simulated outage");
/// assert!(provider.complete("any prompt").await.is_err());
/// assert_eq!(provider.call_count(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    name: &'static str,
    response: Result<String, String>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a provider that always returns `response`
    pub fn new(name: &'static str, response: impl Into<String>) -> Self {
        Self {
            name,
            response: Ok(response.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a provider that always fails with `message`
    pub fn failing(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            response: Err(message.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times `complete` was called (shared across clones)
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl CompletionProvider for MockProvider {
    type Error = LlmError;

    fn name(&self) -> &'static str {
        self.name
    }

    async fn complete(&self, _prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(LlmError::Other(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_fixed_response() {
        let provider = MockProvider::new("mock", "Test response");
        let result = provider.complete("any prompt").await;
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_failure() {
        let provider = MockProvider::failing("mock", "down for maintenance");
        let result = provider.complete("prompt").await;
        assert!(matches!(result, Err(LlmError::Other(_))));
    }

    #[tokio::test]
    async fn test_mock_provider_call_count_shared_across_clones() {
        let provider = MockProvider::new("mock", "ok");
        let clone = provider.clone();

        provider.complete("one").await.unwrap();
        clone.complete("two").await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(clone.call_count(), 2);
    }

    #[test]
    fn test_mock_provider_name() {
        let provider = MockProvider::new("OpenAI GPT-4", "[]");
        assert_eq!(provider.name(), "OpenAI GPT-4");
    }
}
