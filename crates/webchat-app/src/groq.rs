use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::config::RelayConfig;

/// Reply produced by a completion backend
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub message: String,
    pub completion_time: Option<f64>,
}

/// Upstream that turns a conversation into one assistant reply.
///
/// Messages are passed through as the caller sent them, so any shape the
/// upstream accepts (content parts, `name`) reaches it intact.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, messages: &[Value]) -> Result<Completion>;
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    completion_time: Option<f64>,
}

/// Groq chat-completions client
pub struct GroqClient {
    config: RelayConfig,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn build_request(&self, messages: &[Value]) -> Value {
        serde_json::json!({
            "model": self.config.model_id,
            "messages": messages,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "top_p": self.config.top_p,
            "stop": null,
            "stream": false
        })
    }
}

#[async_trait]
impl CompletionBackend for GroqClient {
    async fn complete(&self, messages: &[Value]) -> Result<Completion> {
        let request = self.build_request(messages);
        log::debug!(
            "Requesting completion from {} ({} messages)",
            self.config.api_url,
            messages.len()
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to reach the Groq API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Groq API error: {} - {}", status, error_text));
        }

        let response_text = response.text().await?;
        let completion: CompletionResponse = serde_json::from_str(&response_text)
            .context("Failed to parse Groq API response")?;

        let message = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("No content in response"))?;

        Ok(Completion {
            message,
            completion_time: completion.usage.and_then(|usage| usage.completion_time),
        })
    }
}
