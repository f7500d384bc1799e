//! In-memory store for tests and non-persisting board variants

use crate::error::Result;
use crate::OrderStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A process-local key-value store backed by a shared map.
///
/// Cloning yields a handle to the same underlying map, so a test can keep one
/// handle and hand another to the board engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("store lock poisoned").len()
    }

    /// True if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().expect("store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.read("absent").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryStore::new();
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_write_replaces() {
        let store = MemoryStore::new();
        store.write("k", "first").unwrap();
        store.write("k", "second").unwrap();
        assert_eq!(store.read("k").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_clone_shares_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.write("k", "v").unwrap();
        assert_eq!(handle.read("k").unwrap(), Some("v".to_string()));
    }
}
