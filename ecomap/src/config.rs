//! Gateway configuration.
//!
//! Read once at startup; an absent credential never fails construction.
//! It surfaces as a per-call failure handled by the gateway's fallback
//! policy instead.

use std::time::Duration;

/// Default Gemini model used for both chat and image analysis.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default REST endpoint base for the hosted generative service.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Options for the assistant gateway (library callers or CLI).
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// API credential for the hosted service. `None` means every call will
    /// resolve to the documented fallback value.
    pub api_key: Option<String>,
    /// Model identifier, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// Base URL of the `models` endpoint, overridable for self-hosted proxies.
    pub base_url: String,
    /// Upper bound on a single upstream request.
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Build a configuration from process environment variables.
    ///
    /// `GEMINI_API_KEY` carries the credential; `ECOMAP_MODEL` and
    /// `ECOMAP_BASE_URL` override the defaults when set and non-empty.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env_non_empty("GEMINI_API_KEY"),
            model: env_non_empty("ECOMAP_MODEL").unwrap_or(defaults.model),
            base_url: env_non_empty("ECOMAP_BASE_URL").unwrap_or(defaults.base_url),
            timeout: defaults.timeout,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_overrides() {
        let config = GatewayConfig::default()
            .with_api_key("test-key")
            .with_model("gemini-2.5-pro");
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.model, "gemini-2.5-pro");
    }

    #[test]
    fn test_from_env_reads_and_falls_back() {
        std::env::set_var("ECOMAP_MODEL", "gemini-test-model");
        let config = GatewayConfig::from_env();
        assert_eq!(config.model, "gemini-test-model");

        std::env::remove_var("ECOMAP_MODEL");
        let config = GatewayConfig::from_env();
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
