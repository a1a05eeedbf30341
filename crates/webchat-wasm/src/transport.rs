use async_trait::async_trait;
use gloo_net::http::Request;
use webchat_chat::{ChatError, HttpResponse, HttpTransport};

/// Browser `fetch` transport; relative URLs resolve against the page origin
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, ChatError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ChatError::Transport(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Transport(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse::new(status, status_text, body))
    }
}
