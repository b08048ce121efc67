//! Error types for the relay
//!
//! - [`RelayError`]: anything that stops a question from being answered
//! - [`ConfigError`]: bad or missing settings
//! - [`SessionError`]: client-side refusals

/// Failure while answering a question
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Transport failure talking to the completion API
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Completion API answered with a non-success status
    #[error("upstream returned {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// Completion API answered with an unexpected body
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Relay settings are unusable
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Listener could not be bound
    #[error("failed to bind listener: {0}")]
    Bind(#[from] warp::Error),
}

impl RelayError {
    /// Whether the failure came from the completion API
    #[inline]
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Upstream(_) | Self::UpstreamStatus { .. } | Self::MalformedResponse(_)
        )
    }
}

/// Invalid relay configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No API key for the completion API
    #[error("missing API key (set GROQ_API_KEY)")]
    MissingApiKey,

    /// Bind address did not parse
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBind {
        /// Raw value
        value: String,
        /// Parse failure
        source: std::net::AddrParseError,
    },

    /// Timeout did not parse
    #[error("invalid timeout {value:?}: {source}")]
    InvalidTimeout {
        /// Raw value
        value: String,
        /// Parse failure
        source: std::num::ParseIntError,
    },
}

/// Chat session refused to send
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The per-visit question budget is spent
    #[error("you have reached the maximum of {limit} questions")]
    QuotaExhausted {
        /// Questions allowed per session
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_classification() {
        let status = RelayError::UpstreamStatus {
            status: 502,
            body: "bad gateway".into(),
        };
        assert!(status.is_upstream());
        assert!(status.to_string().contains("502"));

        let config = RelayError::from(ConfigError::MissingApiKey);
        assert!(!config.is_upstream());
        assert!(config.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn session_error_display() {
        let err = SessionError::QuotaExhausted { limit: 3 };
        assert_eq!(
            err.to_string(),
            "you have reached the maximum of 3 questions"
        );
    }
}
