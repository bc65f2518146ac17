//! Browser localStorage
//!
//! Thin wrapper over `window.localStorage`. Every JS exception is turned
//! into `DomainError::Storage`; nothing is retried.

use wasm_bindgen::JsValue;

use super::traits::KeyValueStorage;
use crate::domain::{DomainError, DomainResult};

pub struct WebStorage {
    inner: web_sys::Storage,
}

impl WebStorage {
    /// Open `window.localStorage`
    pub fn open() -> DomainResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| DomainError::Storage("no window available".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("localStorage is disabled".to_string()))?;
        Ok(Self { inner })
    }
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(format!("{:?}", err))
}

impl KeyValueStorage for WebStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.inner.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        self.inner.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> DomainResult<()> {
        self.inner.remove_item(key).map_err(js_error)
    }

    fn keys(&self) -> DomainResult<Vec<String>> {
        let len = self.inner.length().map_err(js_error)?;
        let mut keys = Vec::with_capacity(len as usize);
        for index in 0..len {
            if let Some(key) = self.inner.key(index).map_err(js_error)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
