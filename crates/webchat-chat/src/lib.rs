//! Chat client core for webchat
//!
//! Everything here is platform independent: storage, presentation and HTTP
//! are reached through ports so the same orchestration drives the browser
//! front end and the test suites.

pub mod ai_service;
pub mod app;
pub mod error;
pub mod history;
pub mod storage;
pub mod transport;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

pub use ai_service::{parse_reply, AiService};
pub use app::{App, SubmitOutcome};
pub use error::ChatError;
pub use history::ChatHistory;
pub use storage::{KeyValueStore, MemoryStore};
pub use transport::{HttpResponse, HttpTransport};
pub use view::ChatView;

pub use webchat_types::{ChatEntry, Sender, CHAT_ENDPOINT, ERROR_MESSAGE, HISTORY_KEY};
