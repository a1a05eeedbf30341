use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tower_http::services::ServeDir;
use webchat_types::{ChatReply, ErrorBody, CHAT_ENDPOINT};

use crate::groq::CompletionBackend;

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn CompletionBackend>,
    pub static_dir: PathBuf,
}

/// Body of `POST /api/chat`; only the `messages` array is checked
#[derive(Debug, Deserialize)]
struct RelayRequest {
    messages: Vec<Value>,
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(serve_index))
        .route(CHAT_ENDPOINT, post(chat))
        .nest_service("/static", assets)
        .with_state(state)
}

/// GET / - Serve the chat page
async fn serve_index(State(state): State<AppState>) -> Response {
    let index = state.static_dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => (
            [(header::CACHE_CONTROL, "no-cache, no-store")],
            Html(html),
        )
            .into_response(),
        Err(err) => {
            log::warn!("Failed to read {}: {}", index.display(), err);
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
    }
}

/// POST /api/chat - Relay one conversation to the completion backend
async fn chat(State(state): State<AppState>, body: Bytes) -> Result<Json<ChatReply>, ApiError> {
    let request: RelayRequest = serde_json::from_slice(&body).map_err(|e| {
        log::warn!("Rejected chat request: {}", e);
        ApiError::InvalidRequest
    })?;
    log::info!("Chat request with {} messages", request.messages.len());

    let completion = state
        .backend
        .complete(&request.messages)
        .await
        .map_err(|e| {
            log::error!("Completion failed: {:#}", e);
            ApiError::Upstream(format!("{:#}", e))
        })?;

    Ok(Json(ChatReply {
        message: completion.message,
        completion_time: completion.completion_time,
    }))
}

/// Error handling
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request format")]
    InvalidRequest,
    #[error("{0}")]
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidRequest => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorBody {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
