//! HTTP relay serving the chat page and forwarding `/api/chat` to Groq

pub mod cli;
pub mod config;
pub mod groq;
pub mod routes;
pub mod server;

pub use cli::Cli;
pub use config::{RelayConfig, GROQ_API_URL};
pub use groq::{Completion, CompletionBackend, GroqClient};
pub use routes::{create_router, AppState};
pub use server::{WebServer, WebServerConfig};
