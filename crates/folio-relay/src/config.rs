//! Relay configuration
//!
//! Defaults match the hosted portfolio: Groq's OpenAI-compatible endpoint, the
//! small Llama model, port 3001. Environment variables (optionally from a
//! `.env` file) override them.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;

/// Default completion endpoint
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default completion model
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:3001";

/// Relay settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Listen address
    pub bind: SocketAddr,
    /// Chat-completions endpoint
    pub upstream_url: String,
    /// Bearer token for the endpoint
    pub api_key: Option<String>,
    /// Model name sent upstream
    pub model: String,
    /// Upstream request timeout in seconds
    pub timeout_secs: u64,
}

impl RelayConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With listen address
    #[inline]
    #[must_use]
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    /// With API key
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// With upstream endpoint
    #[inline]
    #[must_use]
    pub fn with_upstream_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_url = url.into();
        self
    }

    /// With model
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Upstream request timeout
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key, or an error if none is configured
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source
    ///
    /// Recognized: `GROQ_API_KEY`, `FOLIO_BIND`, `FOLIO_UPSTREAM_URL`,
    /// `FOLIO_MODEL`, `FOLIO_TIMEOUT_SECS`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("FOLIO_BIND") {
            config.bind = value
                .parse()
                .map_err(|source| ConfigError::InvalidBind { value, source })?;
        }
        if let Some(value) = lookup("FOLIO_TIMEOUT_SECS") {
            config.timeout_secs = value
                .parse()
                .map_err(|source| ConfigError::InvalidTimeout { value, source })?;
        }
        if let Some(url) = lookup("FOLIO_UPSTREAM_URL") {
            config.upstream_url = url;
        }
        if let Some(model) = lookup("FOLIO_MODEL") {
            config.model = model;
        }
        config.api_key = lookup("GROQ_API_KEY");

        Ok(config)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3001)),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 30,
        }
    }
}
