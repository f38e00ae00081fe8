//! Todo Storage
//!
//! Persists the todo list as one JSON array of strings under a single key.
//! The key/value backend is abstracted so the same code runs against
//! `window.localStorage` in the browser and an in-memory map in tests.

use std::collections::HashMap;

use wasm_bindgen::JsValue;

use crate::config::STORAGE_KEY;
use crate::error::{StorageError, StorageResult};

/// Minimal key/value interface, shaped after the Web Storage API
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &mut B {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}

// ========================
// Backends
// ========================

/// `window.localStorage`
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let inner = window
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { inner })
    }
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key).map_err(js_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.inner.remove_item(key).map_err(js_error)
    }
}

/// In-process map; used by tests and when localStorage is blocked
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

// ========================
// Todo Store
// ========================

/// The todo list as persisted under one storage key
pub struct TodoStore<B> {
    backend: B,
    key: &'static str,
}

impl<B: StorageBackend> TodoStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: &'static str) -> Self {
        Self { backend, key }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the persisted list. A missing key, a backend failure or corrupt
    /// JSON all read as an empty list.
    pub fn load(&self) -> Vec<String> {
        let raw = match self.backend.get_item(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::error!(target: "storage", "failed to read '{}': {}", self.key, err);
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!(target: "storage", "discarding corrupt value under '{}': {}", self.key, err);
            Vec::new()
        })
    }

    /// Replace the persisted list
    pub fn save(&mut self, todos: &[String]) -> StorageResult<()> {
        let raw = serde_json::to_string(todos)?;
        self.backend.set_item(self.key, &raw)
    }

    /// Drop the key entirely
    pub fn clear(&mut self) -> StorageResult<()> {
        self.backend.remove_item(self.key)
    }

    pub fn push(&mut self, todo: &str) -> StorageResult<()> {
        let mut todos = self.load();
        todos.push(todo.to_string());
        self.save(&todos)
    }

    /// Remove the first entry equal to `todo`. The list is written back even
    /// when nothing matched.
    pub fn remove_first(&mut self, todo: &str) -> StorageResult<bool> {
        let mut todos = self.load();
        let removed = match todos.iter().position(|t| t == todo) {
            Some(index) => {
                todos.remove(index);
                true
            }
            None => false,
        };
        self.save(&todos)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(raw: Option<&str>) -> TodoStore<MemoryStorage> {
        let mut backend = MemoryStorage::new();
        if let Some(raw) = raw {
            backend.set_item(STORAGE_KEY, raw).unwrap();
        }
        TodoStore::new(backend)
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = store_with(None);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_value_is_empty() {
        let store = store_with(Some("{not json"));
        assert!(store.load().is_empty());

        let store = store_with(Some("[1, 2]"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_writes_json_array() {
        let mut store = store_with(None);
        store
            .save(&["buy milk".to_string(), "walk dog".to_string()])
            .unwrap();

        let raw = store.backend().get_item(STORAGE_KEY).unwrap();
        assert_eq!(raw.as_deref(), Some(r#"["buy milk","walk dog"]"#));
        assert_eq!(store.load(), vec!["buy milk", "walk dog"]);
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut store = store_with(Some(r#"["a"]"#));
        store.push("b").unwrap();
        store.push("c").unwrap();
        assert_eq!(store.load(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_clear_removes_key() {
        let mut store = store_with(Some(r#"["a","b"]"#));
        store.clear().unwrap();
        assert_eq!(store.backend().get_item(STORAGE_KEY).unwrap(), None);
        assert!(store.load().is_empty());

        // Clearing an absent key is fine
        store.clear().unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_remove_first_only_removes_one_duplicate() {
        let mut store = store_with(Some(r#"["a","b","a"]"#));
        assert!(store.remove_first("a").unwrap());
        assert_eq!(store.load(), vec!["b", "a"]);
    }

    #[test]
    fn test_remove_first_without_match() {
        let mut store = store_with(Some(r#"["a"]"#));
        assert!(!store.remove_first("zzz").unwrap());
        assert_eq!(store.load(), vec!["a"]);
    }

    #[test]
    fn test_custom_key() {
        let mut store = TodoStore::with_key(MemoryStorage::new(), "other");
        store.push("x").unwrap();
        assert_eq!(store.backend().get_item(STORAGE_KEY).unwrap(), None);
        assert!(store.backend().get_item("other").unwrap().is_some());
    }

    #[test]
    fn test_store_over_borrowed_backend() {
        let mut backend = MemoryStorage::new();
        {
            let mut store = TodoStore::new(&mut backend as &mut dyn StorageBackend);
            store.push("kept").unwrap();
        }
        assert_eq!(TodoStore::new(backend).load(), vec!["kept"]);
    }
}
