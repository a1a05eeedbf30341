//! Browser tests; run with `wasm-pack test --headless --firefox crates/webchat-wasm`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use webchat_chat::{ChatHistory, ChatView, KeyValueStore, Sender, HISTORY_KEY};
use webchat_types::ChatEntry;
use webchat_wasm::{DomChatView, LocalStorage};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_chat_page() -> web_sys::Document {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    body.set_inner_html(
        r#"
        <div id="sidebar"><div class="chat-history"></div></div>
        <div id="sidebar-overlay"></div>
        <div id="chat-messages"></div>
        <form id="chat-form"><input id="user-input" /></form>
        "#,
    );
    document
}

#[wasm_bindgen_test]
fn local_storage_persists_history() {
    let store = LocalStorage::from_window().unwrap();
    store.set(HISTORY_KEY, "[]");

    let mut history = ChatHistory::new(LocalStorage::from_window().unwrap());
    history.add_chat("Hello", "Hi there");

    let reloaded = ChatHistory::new(LocalStorage::from_window().unwrap());
    assert_eq!(reloaded.get_history(), &[ChatEntry::new("Hello", "Hi there")]);

    store.set(HISTORY_KEY, "[]");
}

#[wasm_bindgen_test]
fn messages_render_as_literal_text() {
    let document = mount_chat_page();
    let view = DomChatView::new(&document).unwrap();

    view.add_message("<b>bold</b>", Sender::User);
    view.add_message("reply", Sender::Bot);

    let messages = document.get_element_by_id("chat-messages").unwrap();
    assert_eq!(messages.child_element_count(), 2);
    let first = messages.first_element_child().unwrap();
    assert_eq!(first.class_name(), "message user-message");
    assert_eq!(first.text_content().unwrap(), "<b>bold</b>");

    view.clear_messages();
    assert_eq!(messages.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn sidebar_rows_and_open_state() {
    let document = mount_chat_page();
    let view = DomChatView::new(&document).unwrap();

    view.render_history(&[ChatEntry::new("a", "b"), ChatEntry::new("c", "d")]);
    let list = document.query_selector(".chat-history").unwrap().unwrap();
    assert_eq!(list.child_element_count(), 2);
    assert_eq!(list.last_element_child().unwrap().text_content().unwrap(), "Chat 2");

    view.set_sidebar_open(true);
    let sidebar = document.get_element_by_id("sidebar").unwrap();
    assert!(sidebar.class_list().contains("open"));
    view.set_sidebar_open(false);
    assert!(!sidebar.class_list().contains("open"));
}
