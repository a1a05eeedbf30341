use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};
use webchat_chat::ChatView;
use webchat_types::{history_label, ChatEntry, Sender};

use crate::dom;

type SelectHandler = Rc<dyn Fn(usize)>;

/// [`ChatView`] bound to the chat page's DOM
pub struct DomChatView {
    document: Document,
    messages: Element,
    input: HtmlInputElement,
    history_list: Element,
    sidebar: Element,
    overlay: Element,
    on_select: RefCell<Option<SelectHandler>>,
    // Row listeners for the current sidebar list; replaced on every render
    row_listeners: RefCell<Vec<Closure<dyn FnMut()>>>,
}

impl DomChatView {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            messages: dom::get_element_by_id(document, "chat-messages")?,
            input: dom::get_input_by_id(document, "user-input")?,
            history_list: dom::query_selector(document, ".chat-history")?,
            sidebar: dom::get_element_by_id(document, "sidebar")?,
            overlay: dom::get_element_by_id(document, "sidebar-overlay")?,
            on_select: RefCell::new(None),
            row_listeners: RefCell::new(Vec::new()),
        })
    }

    /// Register what happens when a sidebar row is clicked
    pub fn on_history_select<F>(&self, handler: F)
    where
        F: Fn(usize) + 'static,
    {
        *self.on_select.borrow_mut() = Some(Rc::new(handler));
    }

    fn create_message(&self, text: &str, sender: Sender) -> Result<Element, JsValue> {
        let element = dom::create_element_with_class(&self.document, "div", &sender.css_classes())?;
        element.set_text_content(Some(text));
        Ok(element)
    }

    fn create_history_row(&self, index: usize) -> Result<Element, JsValue> {
        let row = dom::create_element_with_class(&self.document, "div", "chat-history-item")?;
        row.set_inner_html(&history_row_html(index));

        let handler = self.on_select.borrow().clone();
        let listener = Closure::wrap(Box::new(move || {
            if let Some(ref handler) = handler {
                handler(index);
            }
        }) as Box<dyn FnMut()>);
        row.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
        self.row_listeners.borrow_mut().push(listener);

        Ok(row)
    }

    fn try_render_history(&self, entries: &[ChatEntry]) -> Result<(), JsValue> {
        dom::clear_element(&self.history_list);
        self.row_listeners.borrow_mut().clear();

        for index in 0..entries.len() {
            let row = self.create_history_row(index)?;
            self.history_list.append_child(&row)?;
        }

        dom::create_icons();
        Ok(())
    }
}

impl ChatView for DomChatView {
    fn add_message(&self, text: &str, sender: Sender) {
        let appended = self
            .create_message(text, sender)
            .and_then(|element| self.messages.append_child(&element));
        if let Err(e) = appended {
            log::error!("Failed to render {} message: {:?}", sender.as_str(), e);
            return;
        }
        dom::scroll_to_bottom(&self.messages);
    }

    fn user_input(&self) -> String {
        self.input.value().trim().to_string()
    }

    fn clear_input(&self) {
        self.input.set_value("");
    }

    fn clear_messages(&self) {
        dom::clear_element(&self.messages);
    }

    fn render_history(&self, entries: &[ChatEntry]) {
        if let Err(e) = self.try_render_history(entries) {
            log::error!("Failed to render chat history: {:?}", e);
        }
    }

    fn set_sidebar_open(&self, open: bool) {
        dom::set_open(&self.sidebar, open);
        dom::set_open(&self.overlay, open);
    }
}

/// Markup inside one sidebar row; the label is generated, never user text
fn history_row_html(index: usize) -> String {
    format!(
        r#"<i data-lucide="message-square"></i><span>{}</span>"#,
        history_label(index)
    )
}
