//! Core types shared by the webchat client and relay
//!
//! This crate holds the wire payloads exchanged over `/api/chat` and the
//! persisted history record, so both sides agree on one JSON shape.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Relative endpoint the client posts chat turns to
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Storage key holding the serialized conversation history
pub const HISTORY_KEY: &str = "chatHistory";

/// Text rendered as a bot turn when a response cannot be obtained
pub const ERROR_MESSAGE: &str = "Error: Unable to get a response. Please try again.";

// ============================================================================
// Rendering Types
// ============================================================================

/// Who authored a rendered message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    /// Class list for a message bubble, e.g. `message user-message`
    pub fn css_classes(&self) -> String {
        format!("message {}-message", self.as_str())
    }
}

// ============================================================================
// History Types
// ============================================================================

/// One persisted (user message, bot response) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEntry {
    pub user_message: String,
    pub bot_response: String,
}

impl ChatEntry {
    pub fn new(user_message: impl Into<String>, bot_response: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            bot_response: bot_response.into(),
        }
    }
}

/// Sidebar label for the entry at `index` (0-based); rows are numbered from 1
pub fn history_label(index: usize) -> String {
    format!("Chat {}", index + 1)
}

// ============================================================================
// Wire Types
// ============================================================================

/// A single chat turn in OpenAI-compatible form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Request carrying one user turn
    pub fn from_user(content: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(content)],
        }
    }
}

/// Successful response body for `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    /// Upstream completion time in seconds, when the provider reports it
    #[serde(default)]
    pub completion_time: Option<f64>,
}

/// Error body returned by the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
