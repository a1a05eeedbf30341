use anyhow::{bail, Result};

pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Settings for the upstream completion call
#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    pub api_key: String,
    pub model_id: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub api_url: String,
}

impl RelayConfig {
    /// Reject configurations the relay cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            bail!("The GROQ_API_KEY environment variable is not set.");
        }
        if self.model_id.trim().is_empty() {
            bail!("The GROQ_MODEL_ID environment variable is not set.");
        }
        Ok(())
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model_id: "llama3-8b-8192".to_string(),
            max_tokens: 1000,
            temperature: 0.5,
            top_p: 1.0,
            api_url: GROQ_API_URL.to_string(),
        }
    }
}
