//! Durable key-value storage abstraction.
//!
//! One string-keyed slot per grid namespace. The browser bridge backs this
//! with `window.localStorage`; tests and native hosts use [`MemoryStorage`].

use std::collections::HashMap;
use thiserror::Error;

/// Failure talking to the storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage is disabled or not present (private mode, sandboxed frame).
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A string-keyed slot store.
pub trait LayoutStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: LayoutStorage + ?Sized> LayoutStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-process storage. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Raw slot contents, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl LayoutStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);
        Ok(())
    }
}
