use webchat_types::{ChatEntry, HISTORY_KEY};

use crate::storage::KeyValueStore;

/// Ordered conversation history mirrored into a key-value store.
///
/// The full sequence is rewritten under [`HISTORY_KEY`] after every mutation,
/// so the store and memory never disagree once a call returns.
pub struct ChatHistory<S> {
    store: S,
    history: Vec<ChatEntry>,
}

impl<S: KeyValueStore> ChatHistory<S> {
    /// Restore history from `store`; missing or unreadable data starts empty
    pub fn new(store: S) -> Self {
        let history = match store.get(HISTORY_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring unreadable chat history: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };

        Self { store, history }
    }

    pub fn add_chat(&mut self, user_message: impl Into<String>, bot_response: impl Into<String>) {
        self.history.push(ChatEntry::new(user_message, bot_response));
        self.save_history();
    }

    pub fn get_history(&self) -> &[ChatEntry] {
        &self.history
    }

    pub fn get(&self, index: usize) -> Option<&ChatEntry> {
        self.history.get(index)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.save_history();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn save_history(&self) {
        match serde_json::to_string(&self.history) {
            Ok(json) => self.store.set(HISTORY_KEY, &json),
            Err(e) => log::error!("Failed to serialize chat history: {}", e),
        }
    }
}
