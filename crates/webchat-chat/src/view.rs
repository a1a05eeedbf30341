use webchat_types::{ChatEntry, Sender};

/// Presentation surface the chat app renders into.
///
/// Methods take `&self` because the browser DOM is shared, interior-mutable
/// state; implementations must not call back into the app synchronously.
pub trait ChatView {
    /// Append a bubble holding `text` verbatim (no markup) and scroll to it
    fn add_message(&self, text: &str, sender: Sender);

    /// Current input value with surrounding whitespace removed
    fn user_input(&self) -> String;

    fn clear_input(&self);

    fn clear_messages(&self);

    /// Replace the sidebar list with one row per entry, in order
    fn render_history(&self, entries: &[ChatEntry]);

    /// Show or hide the sidebar and its overlay
    fn set_sidebar_open(&self, open: bool);
}
