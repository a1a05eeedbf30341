use async_trait::async_trait;

use crate::error::ChatError;

/// Raw HTTP response as seen by the chat client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues JSON POST requests on behalf of [`crate::AiService`].
///
/// Futures are not required to be `Send`: the browser transport lives on the
/// single JS thread.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// POST `body` to `url` with `Content-Type: application/json`.
    ///
    /// Any status code is a successful transport result; only failures to
    /// obtain a response map to [`ChatError::Transport`].
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, ChatError>;
}

#[async_trait(?Send)]
impl<T: HttpTransport + ?Sized> HttpTransport for std::rc::Rc<T> {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, ChatError> {
        (**self).post_json(url, body).await
    }
}
