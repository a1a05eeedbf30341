use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::groq::CompletionBackend;
use crate::routes::{self, AppState};

/// Web server configuration
pub struct WebServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

/// Web server instance
pub struct WebServer {
    config: WebServerConfig,
    backend: Arc<dyn CompletionBackend>,
}

impl WebServer {
    pub fn new(config: WebServerConfig, backend: Arc<dyn CompletionBackend>) -> Self {
        Self { config, backend }
    }

    fn router(&self) -> axum::Router {
        let app_state = AppState {
            backend: self.backend.clone(),
            static_dir: self.config.static_dir.clone(),
        };

        // Add CORS layer for development
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(app_state).layer(cors)
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        if !self.config.static_dir.exists() {
            log::warn!(
                "Static directory {} does not exist; the chat page will not load",
                self.config.static_dir.display()
            );
        }

        log::info!("Web server listening on http://{}", listener.local_addr()?);
        log::info!("Chat endpoint: POST {}", webchat_types::CHAT_ENDPOINT);

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
