use thiserror::Error;

/// Failures surfaced while obtaining a bot response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The user input was empty after trimming
    #[error("User input cannot be empty.")]
    Validation,

    /// The endpoint answered with a non-success status
    #[error("Network error: {status_text} (Status code: {status})")]
    Network { status: u16, status_text: String },

    /// The response body was not the expected `{"message": ...}` shape
    #[error("Unexpected API response format: {0}")]
    Format(String),

    /// The request never produced a response
    #[error("Request failed: {0}")]
    Transport(String),
}

impl ChatError {
    pub fn network(status: u16, status_text: impl Into<String>) -> Self {
        ChatError::Network {
            status,
            status_text: status_text.into(),
        }
    }
}
