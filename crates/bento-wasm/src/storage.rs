//! `window.localStorage` as a [`LayoutStorage`].

use bento_core::{LayoutStorage, StorageError};
use wasm_bindgen::JsValue;

/// Browser local storage. Absent when storage is disabled (private
/// browsing, sandboxed iframes, no window), in which case every operation
/// reports [`StorageError::Unavailable`].
pub struct WebStorage {
    inner: Option<web_sys::Storage>,
}

impl WebStorage {
    pub fn local() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("localStorage unavailable; layouts will not persist");
        }
        Self { inner }
    }

    fn backend(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl LayoutStorage for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.backend()?.get_item(key).map_err(storage_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.backend()?.set_item(key, value).map_err(storage_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.backend()?.remove_item(key).map_err(storage_error)
    }
}

/// Map a thrown `DOMException` to a storage error by its `name`.
fn storage_error(err: JsValue) -> StorageError {
    let name = js_sys::Reflect::get(&err, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string());
    match name.as_deref() {
        Some(name) => classify_exception(name),
        None => StorageError::Backend(format!("{err:?}")),
    }
}

fn classify_exception(name: &str) -> StorageError {
    match name {
        // Firefox historically used its own name for the same condition.
        "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED" => StorageError::QuotaExceeded,
        "SecurityError" => StorageError::Unavailable,
        _ => StorageError::Backend(name.to_string()),
    }
}
