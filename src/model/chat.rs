//! Coach-chat message types.
//!
//! The conversation with the coach collaborator travels as role/content
//! pairs. These types give that traffic an explicit shape, validated at the
//! service boundary instead of being passed through opaquely. The network
//! call itself lives outside this crate.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Role of a chat participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who produced the message
    pub role: ChatRole,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    /// Reject empty messages.
    pub fn validate(&self) -> Result<()> {
        if self.content.trim().is_empty() {
            return Err(Error::InvalidMessage("content must not be empty".into()));
        }
        Ok(())
    }
}

/// Validate a running conversation before it is forwarded upstream.
pub fn validate_conversation(messages: &[ChatMessage]) -> Result<()> {
    if messages.is_empty() {
        return Err(Error::InvalidMessage(
            "conversation must contain at least one message".into(),
        ));
    }
    for message in messages {
        message.validate()?;
    }
    Ok(())
}

/// Extract the assistant reply from a chat-completion payload.
///
/// The upstream service answers with the usual completion shape; anything
/// missing `choices[0].message.content` is treated as a malformed payload.
pub fn completion_text(payload: &serde_json::Value) -> Result<String> {
    payload
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(str::to_owned)
        .ok_or_else(|| Error::Upstream("completion payload has no message content".into()))
}
