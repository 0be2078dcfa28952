//! Environment-sourced settings for the pipeline
//!
//! Read once at process start and passed by reference into the
//! orchestrator and gateway; no ambient lookups inside core logic.

use std::str::FromStr;
use std::time::Duration;

/// Pipeline configuration.
///
/// A missing credential disables that provider slot; both missing disables
/// the pipeline (surfaced through the readiness check, not a panic).
#[derive(Debug, Clone)]
pub struct Settings {
    /// OpenAI API credential; `None` disables the primary slot
    pub openai_api_key: Option<String>,

    /// Gemini API credential; `None` disables the secondary slot
    pub gemini_api_key: Option<String>,

    /// OpenAI model identifier
    pub openai_model: String,

    /// Gemini model identifier
    pub gemini_model: String,

    /// Output-token budget per provider request
    pub max_tokens: u32,

    /// Sampling temperature; kept low for consistent legal analysis
    pub temperature: f32,

    /// Maximum accepted upload size in bytes, enforced by the calling layer
    pub max_file_size: usize,

    /// Bound on a single provider attempt; timeout counts as provider
    /// failure for fallback purposes
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            gemini_api_key: None,
            openai_model: "gpt-4".to_string(),
            gemini_model: "gemini-2.0-flash-exp".to_string(),
            max_tokens: 4000,
            temperature: 0.1,
            max_file_size: 10 * 1024 * 1024,
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Read settings from the process environment, falling back to
    /// defaults for anything unset or unparseable.
    ///
    /// Recognized variables: `OPENAI_API_KEY`, `GEMINI_API_KEY`,
    /// `OPENAI_MODEL`, `GEMINI_MODEL`, `MAX_TOKENS`, `TEMPERATURE`,
    /// `MAX_FILE_SIZE`, `REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            openai_api_key: env_credential("OPENAI_API_KEY"),
            gemini_api_key: env_credential("GEMINI_API_KEY"),
            openai_model: env_or("OPENAI_MODEL", defaults.openai_model),
            gemini_model: env_or("GEMINI_MODEL", defaults.gemini_model),
            max_tokens: env_parse("MAX_TOKENS", defaults.max_tokens),
            temperature: env_parse("TEMPERATURE", defaults.temperature),
            max_file_size: env_parse("MAX_FILE_SIZE", defaults.max_file_size),
            request_timeout_secs: env_parse(
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
        }
    }

    /// Per-attempt timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!("temperature {} out of range [0.0, 2.0]", self.temperature));
        }
        if self.max_file_size == 0 {
            return Err("max_file_size must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn env_credential(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.max_tokens, 4000);
        assert_eq!(settings.temperature, 0.1);
        assert_eq!(settings.max_file_size, 10 * 1024 * 1024);
        assert!(settings.openai_api_key.is_none());
    }

    #[test]
    fn test_invalid_temperature() {
        let settings = Settings {
            temperature: 3.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_max_tokens() {
        let settings = Settings {
            max_tokens: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_request_timeout_duration() {
        let settings = Settings::default();
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }
}
