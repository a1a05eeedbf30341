use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod app;
mod dom;
mod storage;
mod transport;
mod view;

pub use app::BrowserApp;
pub use storage::LocalStorage;
pub use transport::FetchTransport;
pub use view::DomChatView;

/// Initialize the WASM module
/// This sets up panic hooks and logging
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("webchat WASM initialized");
}

/// Wire the chat page and render stored history.
///
/// Call once the DOM is loaded; the app stays alive through its event
/// listeners.
#[wasm_bindgen]
pub fn start_chat() -> Result<(), JsValue> {
    app::start()?;
    Ok(())
}

/// Get the window object
fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))
}

/// Get the document object
fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object"))
}
