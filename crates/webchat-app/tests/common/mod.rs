use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;
use webchat::{Completion, CompletionBackend};

/// Backend returning a fixed reply (or failure) and recording what it was sent
pub struct FakeBackend {
    reply: Option<String>,
    pub calls: Mutex<Vec<Vec<Value>>>,
}

impl FakeBackend {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionBackend for FakeBackend {
    async fn complete(&self, messages: &[Value]) -> Result<Completion> {
        self.calls.lock().unwrap().push(messages.to_vec());
        match &self.reply {
            Some(reply) => Ok(Completion {
                message: reply.clone(),
                completion_time: Some(0.125),
            }),
            None => Err(anyhow!("Groq API error: 503 Service Unavailable")),
        }
    }
}
