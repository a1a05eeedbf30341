use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Document;
use webchat_chat::{AiService, App, ChatHistory};

use crate::dom;
use crate::storage::LocalStorage;
use crate::transport::FetchTransport;
use crate::view::DomChatView;

/// The chat app as wired into the browser
pub type BrowserApp = App<DomChatView, LocalStorage, FetchTransport>;

/// Build the app, attach listeners and render stored history
pub fn start() -> Result<Rc<BrowserApp>, JsValue> {
    let document = crate::document()?;

    let view = DomChatView::new(&document)?;
    let history = ChatHistory::new(LocalStorage::from_window()?);
    let app = Rc::new(App::new(view, history, AiService::new(FetchTransport::new())));

    // Rows only hold a weak handle; the page listeners keep the app alive
    let weak = Rc::downgrade(&app);
    app.view().on_history_select(move |index| {
        if let Some(app) = weak.upgrade() {
            app.load_chat(index);
        }
    });

    setup_event_listeners(&document, &app)?;
    app.load();
    dom::create_icons();

    log::info!("Chat ready with {} stored conversations", app.history().len());
    Ok(app)
}

fn setup_event_listeners(document: &Document, app: &Rc<BrowserApp>) -> Result<(), JsValue> {
    let form = dom::get_element_by_id(document, "chat-form")?;
    let submit_app = Rc::clone(app);
    dom::add_event_listener(&form, "submit", move |event| {
        event.prevent_default();
        let app = Rc::clone(&submit_app);
        wasm_bindgen_futures::spawn_local(async move {
            app.handle_submit().await;
        });
    })?;

    let new_chat = dom::get_element_by_id(document, "new-chat")?;
    let new_chat_app = Rc::clone(app);
    dom::add_event_listener(&new_chat, "click", move |_| new_chat_app.start_new_chat())?;

    let clear = dom::get_element_by_id(document, "clear-history")?;
    let clear_app = Rc::clone(app);
    dom::add_event_listener(&clear, "click", move |_| clear_app.clear_history())?;

    let toggle = dom::get_element_by_id(document, "toggle-sidebar")?;
    let toggle_app = Rc::clone(app);
    dom::add_event_listener(&toggle, "click", move |_| toggle_app.toggle_sidebar())?;

    let overlay = dom::get_element_by_id(document, "sidebar-overlay")?;
    let overlay_app = Rc::clone(app);
    dom::add_event_listener(&overlay, "click", move |_| overlay_app.close_sidebar())?;

    Ok(())
}
