use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement};

/// Get element by ID
pub fn get_element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element not found: {}", id)))
}

/// Get input element by ID
pub fn get_input_by_id(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    let element = get_element_by_id(document, id)?;
    element
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("Element is not HtmlInputElement: {}", id)))
}

/// Get the first element matching a CSS selector
pub fn query_selector(document: &Document, selector: &str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("No element matches: {}", selector)))
}

/// Create element with class
pub fn create_element_with_class(
    document: &Document,
    tag: &str,
    class: &str,
) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    element.set_class_name(class);
    Ok(element)
}

/// Add a listener that lives as long as the page
pub fn add_event_listener<F>(target: &EventTarget, event: &str, callback: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Clear element content
pub fn clear_element(element: &Element) {
    element.set_inner_html("");
}

/// Scroll element to bottom
pub fn scroll_to_bottom(element: &Element) {
    element.set_scroll_top(element.scroll_height());
}

/// Add or remove the `open` class
pub fn set_open(element: &Element, open: bool) {
    if let Err(e) = element.class_list().toggle_with_force("open", open) {
        log::error!("Failed to update sidebar state: {:?}", e);
    }
}

/// Re-run `lucide.createIcons()` so freshly inserted `data-lucide` tags render.
///
/// The icon library is optional; a page without it simply shows no glyphs.
pub fn create_icons() {
    let global = js_sys::global();
    let Ok(lucide) = js_sys::Reflect::get(&global, &JsValue::from_str("lucide")) else {
        return;
    };
    if lucide.is_undefined() || lucide.is_null() {
        return;
    }

    let create = js_sys::Reflect::get(&lucide, &JsValue::from_str("createIcons"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

    match create {
        Some(create) => {
            if let Err(e) = create.call0(&lucide) {
                log::warn!("lucide.createIcons failed: {:?}", e);
            }
        }
        None => log::debug!("lucide.createIcons is not available"),
    }
}
