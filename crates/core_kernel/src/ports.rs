//! Storage port
//!
//! Anything that survives between sessions (the invoice counter and saved
//! company settings) lives behind the [`KeyValueStore`] port. The fee and
//! totals engine never touches it; only the outer collaborators in
//! `domain_invoicing` and `interface_service` are handed a store.
//!
//! ```text
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │  Pure engine         │      │  Collaborators       │
//! │  (domain_fees,       │◄─────│  (numbering,         │
//! │   totals composer)   │      │   settings store)    │
//! └──────────────────────┘      └──────────┬───────────┘
//!                                          │ KeyValueStore
//!                               ┌──────────▼───────────┐
//!                               │  InMemoryStore / ... │
//!                               └──────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Error type for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be read or written
    #[error("Store unavailable: {message}")]
    Unavailable { message: String },

    /// A stored value could not be decoded
    #[error("Corrupt value under key {key}: {message}")]
    Corrupt { key: String, message: String },

    /// A value could not be encoded for storage
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates an Unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a Corrupt error
    pub fn corrupt(key: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Corrupt {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// String key-value persistence
///
/// Mirrors the browser-style storage contract: values are opaque strings,
/// a missing key is `Ok(None)`.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`, returning true if a value was present
    fn remove(&self, key: &str) -> Result<bool, StoreError>;

    /// Reads and decodes a JSON value
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::corrupt(key, e.to_string())),
            None => Ok(None),
        }
    }

    /// Encodes and stores a JSON value
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        (**self).remove(key)
    }
}

/// Process-local store, used by tests and single-session tools
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns true if no keys are held
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        Ok(entries.remove(key).is_some())
    }
}
