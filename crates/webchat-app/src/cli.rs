use clap::Parser;
use std::path::PathBuf;

use crate::config::{RelayConfig, GROQ_API_URL};

/// CLI arguments for the webchat relay
#[derive(Parser, Debug, Clone)]
#[command(name = "webchat-server")]
#[command(about = "Serve the webchat page and relay chat turns to Groq")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for completions
    #[arg(long, env = "GROQ_MODEL_ID", default_value = "llama3-8b-8192")]
    pub model_id: String,

    /// Maximum tokens per response
    #[arg(long, env = "MAX_TOKENS", default_value_t = 1000)]
    pub max_tokens: u32,

    /// Sampling temperature
    #[arg(long, env = "TEMPERATURE", default_value_t = 0.5)]
    pub temperature: f32,

    /// Nucleus sampling threshold
    #[arg(long, env = "TOP_P", default_value_t = 1.0)]
    pub top_p: f32,

    /// Chat completions endpoint (OpenAI-compatible)
    #[arg(long, env = "GROQ_API_URL", default_value = GROQ_API_URL)]
    pub api_url: String,

    /// Address to bind
    #[arg(long, env = "WEBCHAT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "WEBCHAT_PORT", default_value_t = 7777)]
    pub port: u16,

    /// Directory holding index.html and the wasm bundle
    #[arg(long, env = "WEBCHAT_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}

impl Cli {
    pub fn relay_config(&self) -> RelayConfig {
        RelayConfig {
            api_key: self.api_key.clone().unwrap_or_default(),
            model_id: self.model_id.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            api_url: self.api_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "webchat-server",
            "--api-key",
            "k",
            "--model-id",
            "llama-3.1-8b-instant",
            "--port",
            "8080",
            "--temperature",
            "0.2",
        ]);
        let config = cli.relay_config();

        assert_eq!(config.api_key, "k");
        assert_eq!(config.model_id, "llama-3.1-8b-instant");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 1000);
        assert_eq!(cli.port, 8080);
    }
}
