//! Key/value storage
//!
//! The gate flag lives in session storage and the auth token in local storage.
//! Both are reached through [`KeyValueStore`] so components get their storage
//! injected and tests can use [`MemoryStore`].

use std::collections::HashMap;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{KeyValueStore, MemoryStore};

    /// `window.sessionStorage` / `window.localStorage`.
    ///
    /// If the browser refuses storage (privacy mode, disabled cookies) the
    /// store degrades to memory for the lifetime of the page.
    pub struct WebStorage {
        storage: Option<web_sys::Storage>,
        fallback: MemoryStore,
    }

    impl WebStorage {
        pub fn session() -> Self {
            let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
            Self::wrap("sessionStorage", storage)
        }

        pub fn local() -> Self {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            Self::wrap("localStorage", storage)
        }

        fn wrap(name: &str, storage: Option<web_sys::Storage>) -> Self {
            if storage.is_none() {
                tracing::warn!("{name} unavailable, falling back to memory");
            }
            Self {
                storage,
                fallback: MemoryStore::new(),
            }
        }
    }

    impl KeyValueStore for WebStorage {
        fn get(&self, key: &str) -> Option<String> {
            match &self.storage {
                Some(storage) => storage
                    .get_item(key)
                    .ok()
                    .flatten()
                    .or_else(|| self.fallback.get(key)),
                None => self.fallback.get(key),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            match &self.storage {
                Some(storage) => {
                    if let Err(e) = storage.set_item(key, value) {
                        tracing::warn!("storage set {key} failed: {:?}", e);
                        self.fallback.set(key, value);
                    }
                }
                None => self.fallback.set(key, value),
            }
        }

        fn remove(&mut self, key: &str) {
            if let Some(storage) = &self.storage {
                let _ = storage.remove_item(key);
            }
            self.fallback.remove(key);
        }
    }
}
