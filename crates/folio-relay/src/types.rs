//! Wire types shared by the relay, its upstream and the chat client

use serde::{Deserialize, Serialize};

/// Body returned with a 500
pub const SERVER_ERROR_ANSWER: &str = "Server error";

/// `POST /ask` request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// Visitor's question
    pub question: String,
}

impl AskRequest {
    /// New request
    #[inline]
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// `POST /ask` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    /// Generated answer, or the fixed error text
    pub answer: String,
}

impl AskResponse {
    /// Successful answer
    #[inline]
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }

    /// Body sent with a 500
    #[inline]
    #[must_use]
    pub fn server_error() -> Self {
        Self::new(SERVER_ERROR_ANSWER)
    }
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions ahead of the conversation
    System,
    /// Visitor
    User,
    /// Model
    Assistant,
}

/// One turn of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author
    pub role: Role,
    /// Text
    pub content: String,
}

impl ChatMessage {
    /// System instruction
    #[inline]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Visitor message
    #[inline]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Model message
    #[inline]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_request_requires_question() {
        assert!(serde_json::from_str::<AskRequest>("{}").is_err());
        let ok: AskRequest = serde_json::from_str(r#"{"question":"hi"}"#).unwrap();
        assert_eq!(ok.question, "hi");
    }

    #[test]
    fn server_error_body() {
        let json = serde_json::to_string(&AskResponse::server_error()).unwrap();
        assert_eq!(json, r#"{"answer":"Server error"}"#);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(ChatMessage::system("be brief")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"role": "system", "content": "be brief"})
        );
    }
}
