//! Chat window client
//!
//! [`ChatSession`] holds the chat window's transcript and enforces the
//! per-visit question budget. Requests go through an [`AskTransport`] so the
//! session can be driven without a network; [`RelayClient`] is the HTTP one.

use crate::error::{RelayError, SessionError};
use crate::types::{AskRequest, AskResponse, ChatMessage, Role};
use async_trait::async_trait;
use folio_windows::{Panel, WindowId, WindowPayload};
use serde::Serialize;

/// Questions a visitor may ask per session
pub const MAX_QUESTIONS: usize = 3;

/// Assistant message shown when the relay cannot be reached
pub const FALLBACK_ANSWER: &str = "Error: could not get response.";

/// Sends one question to the relay
#[async_trait]
pub trait AskTransport: Send + Sync {
    /// Return the relay's answer text
    async fn ask(&self, question: &str) -> Result<String, RelayError>;
}

/// HTTP transport for a running relay
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    /// Client for the relay at `base_url` (e.g. `http://127.0.0.1:3001`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Client reusing an existing HTTP client
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Full `/ask` URL
    #[must_use]
    pub fn ask_url(&self) -> String {
        format!("{}/ask", self.base_url)
    }
}

#[async_trait]
impl AskTransport for RelayClient {
    async fn ask(&self, question: &str) -> Result<String, RelayError> {
        let response = self
            .http
            .post(self.ask_url())
            .json(&AskRequest::new(question))
            .send()
            .await?;

        // The relay puts its text in `answer` on errors too
        let body: AskResponse = response
            .json()
            .await
            .map_err(|e| RelayError::MalformedResponse(e.to_string()))?;
        Ok(body.answer)
    }
}

/// What the chat window renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatView {
    /// Transcript, oldest first
    pub messages: Vec<ChatMessage>,
    /// Current draft
    pub input: String,
    /// Whether the composer accepts input
    pub input_enabled: bool,
    /// Notice shown once the budget is spent
    pub notice: Option<String>,
}

/// State of the chat window
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    asked: usize,
    input: String,
}

impl ChatSession {
    /// Empty session
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a question and append the exchange to the transcript
    ///
    /// Once [`MAX_QUESTIONS`] have been submitted this refuses without calling
    /// the transport. A failed request still counts and appends
    /// [`FALLBACK_ANSWER`].
    pub async fn send(
        &mut self,
        transport: &dyn AskTransport,
        question: &str,
    ) -> Result<&ChatMessage, SessionError> {
        if self.is_locked() {
            return Err(SessionError::QuotaExhausted {
                limit: MAX_QUESTIONS,
            });
        }

        self.messages.push(ChatMessage::user(question));
        self.asked += 1;
        self.input.clear();

        let answer = match transport.ask(question).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                FALLBACK_ANSWER.to_string()
            }
        };
        self.messages.push(ChatMessage::assistant(answer));

        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Submit the current draft
    pub async fn send_input(
        &mut self,
        transport: &dyn AskTransport,
    ) -> Result<&ChatMessage, SessionError> {
        let question = self.input.clone();
        self.send(transport, &question).await
    }

    /// Transcript, oldest first
    #[inline]
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Assistant replies only
    pub fn answers(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|m| m.role == Role::Assistant)
    }

    /// Questions submitted so far
    #[inline]
    #[must_use]
    pub fn asked(&self) -> usize {
        self.asked
    }

    /// Questions left in the budget
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        MAX_QUESTIONS.saturating_sub(self.asked)
    }

    /// Whether the budget is spent
    #[inline]
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.asked >= MAX_QUESTIONS
    }

    /// Current draft
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the draft; ignored once locked
    pub fn set_input(&mut self, input: impl Into<String>) {
        if !self.is_locked() {
            self.input = input.into();
        }
    }
}

impl Panel for ChatSession {
    type View = ChatView;

    fn window_id(&self) -> WindowId {
        WindowId::ChatGpt
    }

    fn view(&self, _payload: Option<&WindowPayload>) -> Option<ChatView> {
        let locked = self.is_locked();
        Some(ChatView {
            messages: self.messages.clone(),
            input: self.input.clone(),
            input_enabled: !locked,
            notice: locked.then(|| {
                SessionError::QuotaExhausted {
                    limit: MAX_QUESTIONS,
                }
                .to_string()
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Scripted {
        fail: bool,
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AskTransport for Scripted {
        async fn ask(&self, question: &str) -> Result<String, RelayError> {
            self.seen.lock().push(question.to_string());
            if self.fail {
                Err(RelayError::MalformedResponse("offline".into()))
            } else {
                Ok(format!("re: {question}"))
            }
        }
    }

    #[tokio::test]
    async fn send_appends_exchange() {
        let transport = Scripted::default();
        let mut session = ChatSession::new();

        let reply = session.send(&transport, "skills?").await.unwrap();
        assert_eq!(reply, &ChatMessage::assistant("re: skills?"));
        assert_eq!(
            session.messages(),
            &[
                ChatMessage::user("skills?"),
                ChatMessage::assistant("re: skills?")
            ]
        );
        assert_eq!(session.remaining(), 2);
    }

    #[tokio::test]
    async fn fourth_question_refused_without_request() {
        let transport = Scripted::default();
        let mut session = ChatSession::new();
        for q in ["a", "b", "c"] {
            session.send(&transport, q).await.unwrap();
        }

        let err = session.send(&transport, "d").await.unwrap_err();
        assert_eq!(err, SessionError::QuotaExhausted { limit: 3 });
        assert_eq!(transport.seen.lock().len(), 3);
        assert_eq!(session.messages().len(), 6);
        assert!(session.is_locked());
    }

    #[tokio::test]
    async fn failure_uses_fallback_and_counts() {
        let transport = Scripted {
            fail: true,
            ..Scripted::default()
        };
        let mut session = ChatSession::new();

        let reply = session.send(&transport, "hello").await.unwrap();
        assert_eq!(reply.content, FALLBACK_ANSWER);
        assert_eq!(session.asked(), 1);
    }

    #[tokio::test]
    async fn send_input_clears_draft() {
        let transport = Scripted::default();
        let mut session = ChatSession::new();
        session.set_input("projects?");

        session.send_input(&transport).await.unwrap();
        assert_eq!(session.input(), "");
        assert_eq!(transport.seen.lock().as_slice(), ["projects?"]);
    }

    #[tokio::test]
    async fn locked_view_disables_input() {
        let transport = Scripted::default();
        let mut session = ChatSession::new();
        assert!(session.view(None).unwrap().input_enabled);

        for q in ["a", "b", "c"] {
            session.send(&transport, q).await.unwrap();
        }
        session.set_input("ignored");

        let view = session.view(None).unwrap();
        assert!(!view.input_enabled);
        assert_eq!(view.input, "");
        assert_eq!(
            view.notice.as_deref(),
            Some("you have reached the maximum of 3 questions")
        );
        assert_eq!(session.answers().count(), 3);
    }

    #[test]
    fn client_url_trims_slash() {
        let client = RelayClient::new("http://127.0.0.1:3001/");
        assert_eq!(client.ask_url(), "http://127.0.0.1:3001/ask");
    }

    #[test]
    fn panel_bound_to_chat_window() {
        assert_eq!(ChatSession::new().window_id(), WindowId::ChatGpt);
    }
}
