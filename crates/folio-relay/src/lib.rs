//! Folio Chat Relay
//!
//! The only backend the desktop has:
//! - Serves `POST /ask`, prepending the portfolio persona to each question
//! - Forwards the conversation to an OpenAI-compatible completion API
//! - Maps every failure to a fixed `500 { "answer": "Server error" }`
//!
//! The client half lives here too: [`ChatSession`] is the chat window's state,
//! capped at three questions per visit.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_relay::{serve, RelayConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = RelayConfig::from_env()?;
//! serve(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod persona;
pub mod provider;
pub mod server;
pub mod types;

// Re-exports for convenience
pub use client::{
    AskTransport, ChatSession, ChatView, RelayClient, FALLBACK_ANSWER, MAX_QUESTIONS,
};
pub use config::RelayConfig;
pub use error::{ConfigError, RelayError, SessionError};
pub use provider::{CompletionProvider, OpenAiCompatProvider, SharedProvider};
pub use server::{relay_question, routes, serve, serve_with};
pub use types::{AskRequest, AskResponse, ChatMessage, Role, SERVER_ERROR_ANSWER};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
