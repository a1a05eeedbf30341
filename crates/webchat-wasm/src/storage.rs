use wasm_bindgen::JsValue;
use web_sys::Storage;
use webchat_chat::KeyValueStore;

/// `window.localStorage` as a [`KeyValueStore`]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn from_window() -> Result<Self, JsValue> {
        let storage = crate::window()?
            .local_storage()?
            .ok_or_else(|| JsValue::from_str("localStorage is not available"))?;
        Ok(Self::new(storage))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read '{}' from localStorage: {:?}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::error!("Failed to write '{}' to localStorage: {:?}", key, e);
        }
    }
}
