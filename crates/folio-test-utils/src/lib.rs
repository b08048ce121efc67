//! Testing utilities for the Folio workspace
//!
//! Stub completion providers and transports, payload fixtures and
//! pre-populated stores.

#![allow(missing_docs)]

use async_trait::async_trait;
use folio_relay::{AskTransport, ChatMessage, CompletionProvider, RelayError};
use folio_windows::{ImageFile, TextFile, WindowId, WindowPayload, WindowStore};
use parking_lot::Mutex;
use std::sync::Arc;

/// Completion provider with a canned outcome that records every conversation
#[derive(Debug, Default)]
pub struct StubProvider {
    answer: Option<String>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl StubProvider {
    pub fn answering(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            calls: Mutex::default(),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Conversations received, oldest first
    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, RelayError> {
        self.calls.lock().push(messages.to_vec());
        self.answer
            .clone()
            .ok_or_else(|| RelayError::MalformedResponse("stub provider has no answer".into()))
    }
}

/// Ask transport with a canned outcome that records every question
#[derive(Debug, Default)]
pub struct StubTransport {
    answer: Option<String>,
    questions: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn answering(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            questions: Mutex::default(),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().clone()
    }
}

#[async_trait]
impl AskTransport for StubTransport {
    async fn ask(&self, question: &str) -> Result<String, RelayError> {
        self.questions.lock().push(question.to_string());
        self.answer
            .clone()
            .ok_or_else(|| RelayError::MalformedResponse("stub transport has no answer".into()))
    }
}

pub fn sample_image_payload() -> WindowPayload {
    WindowPayload::Image(ImageFile {
        id: 1,
        name: "Gallery image".into(),
        icon: "/images/image.png".into(),
        image_url: Some("/images/gal1.png".into()),
    })
}

pub fn sample_text_payload() -> WindowPayload {
    WindowPayload::Text(TextFile {
        id: 1,
        name: "about-me.txt".into(),
        icon: "/images/txt.png".into(),
        subtitle: Some("Meet the developer".into()),
        image_url: None,
        description: vec!["Hey there.".into(), "I build things for the web.".into()],
    })
}

/// Store with `ids` opened in order, without payloads
pub fn store_with_open(ids: &[WindowId]) -> WindowStore {
    let store = WindowStore::new();
    for &id in ids {
        store.open(id, None);
    }
    store
}
