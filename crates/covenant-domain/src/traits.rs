//! Trait definitions for external interactions
//!
//! These traits define the boundary between the extraction pipeline and the
//! LLM infrastructure. Concrete providers live in covenant-llm.

/// A hosted LLM that can complete a prompt.
///
/// Implementations are stateless after construction and safe to reuse
/// across requests. The gateway holds two optional slots of this trait and
/// iterates them in fixed preference order; there is no dynamic dispatch.
#[allow(async_fn_in_trait)]
pub trait CompletionProvider {
    /// Error type for provider operations
    type Error: std::fmt::Display;

    /// Human-readable provider name, surfaced in the result envelope
    /// (e.g. "OpenAI GPT-4", "Google Gemini")
    fn name(&self) -> &'static str;

    /// Send a single prompt and return the raw text response
    async fn complete(&self, prompt: &str) -> Result<String, Self::Error>;
}
