use serde_json::Value;
use webchat_types::{ChatRequest, CHAT_ENDPOINT};

use crate::error::ChatError;
use crate::transport::HttpTransport;

/// Fetches bot replies from the chat endpoint
pub struct AiService<T> {
    transport: T,
    endpoint: String,
}

impl<T: HttpTransport> AiService<T> {
    /// Service posting to the default `/api/chat` endpoint
    pub fn new(transport: T) -> Self {
        Self::with_endpoint(transport, CHAT_ENDPOINT)
    }

    pub fn with_endpoint(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one user message and return the bot's reply.
    ///
    /// Empty (or whitespace-only) input is rejected before any request is
    /// made. Every failure is logged once and handed back unchanged; there is
    /// no retry and no timeout.
    pub async fn get_bot_response(&self, user_input: &str) -> Result<String, ChatError> {
        let result = self.fetch_reply(user_input).await;
        if let Err(ref e) = result {
            log::error!("Error fetching bot response: {}", e);
        }
        result
    }

    async fn fetch_reply(&self, user_input: &str) -> Result<String, ChatError> {
        let input = user_input.trim();
        if input.is_empty() {
            return Err(ChatError::Validation);
        }

        let payload = serde_json::to_string(&ChatRequest::from_user(input))
            .map_err(|e| ChatError::Format(format!("failed to encode request: {}", e)))?;
        log::debug!("Posting to {}: {}", self.endpoint, payload);

        let response = self.transport.post_json(&self.endpoint, payload).await?;
        if !response.is_success() {
            return Err(ChatError::network(response.status, response.status_text));
        }

        parse_reply(&response.body)
    }
}

/// Extract the `message` field from a response body.
///
/// A body that is not JSON, lacks `message`, or carries an empty or
/// non-string `message` is a format error.
pub fn parse_reply(body: &str) -> Result<String, ChatError> {
    let data: Value = serde_json::from_str(body)
        .map_err(|e| ChatError::Format(format!("invalid JSON body: {}", e)))?;

    match data.get("message").and_then(Value::as_str) {
        Some(message) if !message.is_empty() => Ok(message.to_string()),
        _ => Err(ChatError::Format(
            "'message' field is missing.".to_string(),
        )),
    }
}
