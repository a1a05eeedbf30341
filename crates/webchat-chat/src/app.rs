use std::cell::{Cell, Ref, RefCell};

use webchat_types::{Sender, ERROR_MESSAGE};

use crate::ai_service::AiService;
use crate::error::ChatError;
use crate::history::ChatHistory;
use crate::storage::KeyValueStore;
use crate::transport::HttpTransport;
use crate::view::ChatView;

/// Result of one submit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank; nothing was rendered or sent
    Empty,
    /// The bot answered and the turn was recorded
    Answered,
    /// The request failed; the error text was rendered and nothing recorded
    Failed(ChatError),
}

/// Application context wiring the view, history and AI service together.
///
/// One instance exists per page. Handlers take `&self` so the app can sit in
/// an `Rc` shared by every event listener; no `RefCell` borrow is held across
/// the network await, so overlapping submits are allowed to interleave.
pub struct App<V, S, T> {
    view: V,
    history: RefCell<ChatHistory<S>>,
    ai: AiService<T>,
    sidebar_open: Cell<bool>,
}

impl<V, S, T> App<V, S, T>
where
    V: ChatView,
    S: KeyValueStore,
    T: HttpTransport,
{
    pub fn new(view: V, history: ChatHistory<S>, ai: AiService<T>) -> Self {
        Self {
            view,
            history: RefCell::new(history),
            ai,
            sidebar_open: Cell::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn history(&self) -> Ref<'_, ChatHistory<S>> {
        self.history.borrow()
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open.get()
    }

    /// Render every stored turn, then the sidebar list
    pub fn load(&self) {
        {
            let history = self.history.borrow();
            for chat in history.get_history() {
                self.view.add_message(&chat.user_message, Sender::User);
                self.view.add_message(&chat.bot_response, Sender::Bot);
            }
        }
        self.update_history_list();
    }

    /// Handle a form submit: send the input and render the reply or an error
    pub async fn handle_submit(&self) -> SubmitOutcome {
        let user_input = self.view.user_input();
        if user_input.is_empty() {
            log::warn!("User input is empty");
            return SubmitOutcome::Empty;
        }

        self.view.add_message(&user_input, Sender::User);
        self.view.clear_input();

        match self.ai.get_bot_response(&user_input).await {
            Ok(bot_response) => {
                self.view.add_message(&bot_response, Sender::Bot);
                self.history.borrow_mut().add_chat(user_input, bot_response);
                self.update_history_list();
                SubmitOutcome::Answered
            }
            Err(e) => {
                log::error!("Error while getting the bot response: {}", e);
                self.view.add_message(ERROR_MESSAGE, Sender::Bot);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Clear the rendered conversation; stored history is kept
    pub fn start_new_chat(&self) {
        self.view.clear_messages();
        self.close_sidebar();
    }

    pub fn clear_history(&self) {
        self.history.borrow_mut().clear_history();
        self.update_history_list();
        self.close_sidebar();
    }

    /// Show only the stored turn at `index`
    pub fn load_chat(&self, index: usize) {
        let entry = self.history.borrow().get(index).cloned();
        let Some(chat) = entry else {
            log::warn!("No chat history entry at index {}", index);
            return;
        };

        self.view.clear_messages();
        self.view.add_message(&chat.user_message, Sender::User);
        self.view.add_message(&chat.bot_response, Sender::Bot);
        self.close_sidebar();
    }

    pub fn toggle_sidebar(&self) {
        let open = !self.sidebar_open.get();
        self.sidebar_open.set(open);
        self.view.set_sidebar_open(open);
    }

    pub fn close_sidebar(&self) {
        self.sidebar_open.set(false);
        self.view.set_sidebar_open(false);
    }

    fn update_history_list(&self) {
        let history = self.history.borrow();
        self.view.render_history(history.get_history());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::transport::HttpResponse;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use webchat_types::{ChatEntry, HISTORY_KEY};

    #[derive(Default)]
    struct FakeView {
        input: RefCell<String>,
        messages: RefCell<Vec<(String, Sender)>>,
        history_rows: RefCell<Vec<ChatEntry>>,
        sidebar_open: Cell<bool>,
    }

    impl ChatView for FakeView {
        fn add_message(&self, text: &str, sender: Sender) {
            self.messages.borrow_mut().push((text.to_string(), sender));
        }

        fn user_input(&self) -> String {
            self.input.borrow().trim().to_string()
        }

        fn clear_input(&self) {
            self.input.borrow_mut().clear();
        }

        fn clear_messages(&self) {
            self.messages.borrow_mut().clear();
        }

        fn render_history(&self, entries: &[ChatEntry]) {
            *self.history_rows.borrow_mut() = entries.to_vec();
        }

        fn set_sidebar_open(&self, open: bool) {
            self.sidebar_open.set(open);
        }
    }

    struct FixedTransport(HttpResponse);

    #[async_trait(?Send)]
    impl HttpTransport for FixedTransport {
        async fn post_json(&self, _url: &str, _body: String) -> Result<HttpResponse, ChatError> {
            Ok(self.0.clone())
        }
    }

    fn app_with(
        store: MemoryStore,
        response: HttpResponse,
    ) -> App<FakeView, MemoryStore, FixedTransport> {
        App::new(
            FakeView::default(),
            ChatHistory::new(store),
            AiService::new(FixedTransport(response)),
        )
    }

    fn ok_reply(message: &str) -> HttpResponse {
        HttpResponse::new(200, "OK", serde_json::json!({ "message": message }).to_string())
    }

    fn rendered(app: &App<FakeView, MemoryStore, FixedTransport>) -> Vec<(String, Sender)> {
        app.view().messages.borrow().clone()
    }

    #[tokio::test]
    async fn test_blank_submit_does_nothing() {
        let app = app_with(MemoryStore::new(), ok_reply("unused"));
        *app.view().input.borrow_mut() = "   ".to_string();

        assert_eq!(app.handle_submit().await, SubmitOutcome::Empty);
        assert!(rendered(&app).is_empty());
        assert!(app.history().is_empty());
    }

    #[tokio::test]
    async fn test_submit_clears_input_and_refreshes_sidebar() {
        let app = app_with(MemoryStore::new(), ok_reply("Hi there"));
        *app.view().input.borrow_mut() = " Hello ".to_string();

        assert_eq!(app.handle_submit().await, SubmitOutcome::Answered);
        assert!(app.view().input.borrow().is_empty());
        assert_eq!(
            *app.view().history_rows.borrow(),
            vec![ChatEntry::new("Hello", "Hi there")]
        );
    }

    #[test]
    fn test_load_renders_stored_turns_in_order() {
        let stored = r#"[{"userMessage":"a","botResponse":"b"},{"userMessage":"c","botResponse":"d"}]"#;
        let app = app_with(MemoryStore::with_value(HISTORY_KEY, stored), ok_reply("x"));

        app.load();

        assert_eq!(
            rendered(&app),
            vec![
                ("a".to_string(), Sender::User),
                ("b".to_string(), Sender::Bot),
                ("c".to_string(), Sender::User),
                ("d".to_string(), Sender::Bot),
            ]
        );
        assert_eq!(app.view().history_rows.borrow().len(), 2);
    }

    #[test]
    fn test_load_chat_replaces_rendered_list() {
        let stored = r#"[{"userMessage":"a","botResponse":"b"},{"userMessage":"c","botResponse":"d"}]"#;
        let app = app_with(MemoryStore::with_value(HISTORY_KEY, stored), ok_reply("x"));
        app.load();
        app.toggle_sidebar();

        app.load_chat(1);

        assert_eq!(
            rendered(&app),
            vec![("c".to_string(), Sender::User), ("d".to_string(), Sender::Bot)]
        );
        assert!(!app.is_sidebar_open());
    }

    #[test]
    fn test_load_chat_out_of_range_is_ignored() {
        let app = app_with(MemoryStore::new(), ok_reply("x"));
        app.view().add_message("keep", Sender::User);

        app.load_chat(3);

        assert_eq!(rendered(&app), vec![("keep".to_string(), Sender::User)]);
    }

    #[test]
    fn test_new_chat_keeps_stored_history() {
        let stored = r#"[{"userMessage":"a","botResponse":"b"}]"#;
        let app = app_with(MemoryStore::with_value(HISTORY_KEY, stored), ok_reply("x"));
        app.load();

        app.start_new_chat();

        assert!(rendered(&app).is_empty());
        assert_eq!(app.history().len(), 1);
        assert!(!app.view().sidebar_open.get());
    }

    #[test]
    fn test_clear_history_empties_store_and_sidebar() {
        let stored = r#"[{"userMessage":"a","botResponse":"b"}]"#;
        let app = app_with(MemoryStore::with_value(HISTORY_KEY, stored), ok_reply("x"));
        app.load();
        app.toggle_sidebar();

        app.clear_history();

        assert!(app.history().is_empty());
        assert_eq!(app.history().store().get(HISTORY_KEY).as_deref(), Some("[]"));
        assert!(app.view().history_rows.borrow().is_empty());
        assert!(!app.view().sidebar_open.get());
    }

    #[test]
    fn test_toggle_sidebar_flips_state() {
        let app = app_with(MemoryStore::new(), ok_reply("x"));

        app.toggle_sidebar();
        assert!(app.view().sidebar_open.get());
        app.toggle_sidebar();
        assert!(!app.view().sidebar_open.get());

        app.toggle_sidebar();
        app.close_sidebar();
        assert!(!app.is_sidebar_open());
    }
}
