//! Storage port for card profile fields.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Key/value string storage the profile is persisted to.
pub trait ProfileStore {
    /// Value for `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Error type for profile storage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No storage backend (no window, or storage disabled by the browser).
    #[error("storage unavailable")]
    Unavailable,
    /// The browser rejected the operation (quota, security policy).
    #[error("storage error: {0}")]
    Js(String),
    /// Serialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<JsValue> for StoreError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// `window.localStorage`
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        let storage = window.local_storage()?.ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl ProfileStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.storage.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(self.storage.set_item(key, value)?)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Ok(self.storage.remove_item(key)?)
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStore;
