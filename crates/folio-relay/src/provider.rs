//! Completion providers
//!
//! [`CompletionProvider`] is the seam between the relay and whichever API
//! generates answers. [`OpenAiCompatProvider`] talks to any
//! OpenAI-compatible chat-completions endpoint (Groq by default).

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::types::ChatMessage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Generates an answer for a conversation
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Complete the conversation, returning the assistant's text
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, RelayError>;
}

/// Provider shared across request handlers
pub type SharedProvider = Arc<dyn CompletionProvider>;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completions endpoint
#[derive(Debug, Clone)]
pub struct OpenAiCompatProvider {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiCompatProvider {
    /// Provider with an explicit HTTP client
    pub fn new(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Provider built from relay settings
    pub fn from_config(config: &RelayConfig) -> Result<Self, RelayError> {
        let api_key = config.require_api_key()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self::new(
            http,
            &config.upstream_url,
            api_key,
            &config.model,
        ))
    }

    /// Model name sent upstream
    #[inline]
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompatProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, RelayError> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| RelayError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                RelayError::MalformedResponse("no message content in first choice".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn request_body_shape() {
        let messages = vec![ChatMessage::system("persona"), ChatMessage::user("hi")];
        let request = CompletionRequest {
            model: "llama-3.1-8b-instant",
            messages: &messages,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama-3.1-8b-instant");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
    }

    #[test]
    fn response_without_choices_parses_empty() {
        let parsed: CompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn from_config_requires_key() {
        let err = OpenAiCompatProvider::from_config(&RelayConfig::new()).unwrap_err();
        assert!(matches!(err, RelayError::Config(ConfigError::MissingApiKey)));
    }

    #[test]
    fn from_config_uses_model() {
        let config = RelayConfig::new().with_api_key("k").with_model("m");
        let provider = OpenAiCompatProvider::from_config(&config).unwrap();
        assert_eq!(provider.model(), "m");
    }
}
