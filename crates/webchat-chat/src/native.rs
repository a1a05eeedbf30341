//! `reqwest`-backed transport for running the client core outside a browser

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::error::ChatError;
use crate::transport::{HttpResponse, HttpTransport};

/// Transport that resolves relative endpoints against a base URL
pub struct ReqwestTransport {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            url.trim_start_matches('/')
        )
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, ChatError> {
        let response = self
            .client
            .post(self.resolve(url))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        Ok(HttpResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            body,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_relative_paths() {
        let transport = ReqwestTransport::new("http://localhost:7777/");
        assert_eq!(transport.resolve("/api/chat"), "http://localhost:7777/api/chat");
        assert_eq!(
            transport.resolve("https://example.com/api/chat"),
            "https://example.com/api/chat"
        );
    }
}
