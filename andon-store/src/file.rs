//! JSON-file-backed store for desktop shells

use crate::error::Result;
use crate::OrderStore;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A key-value store that keeps all entries in a single JSON file.
///
/// The file is read on every lookup and rewritten on every store, which is
/// fine for the access pattern here: one read at board load, one write per
/// committed column reorder. Parent directories are created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path. The file does not need
    /// to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content).unwrap_or_default()),
            Err(_) => Ok(HashMap::new()),
        }
    }
}

impl OrderStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, content)?;

        debug!(key, path = %self.path.display(), "wrote store entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("prefs").join("store.json"));
        (temp, store)
    }

    #[test]
    fn test_read_missing_file() {
        let (_temp, store) = setup();
        assert_eq!(store.read("k").unwrap(), None);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let (_temp, store) = setup();
        store.write("k", "v").unwrap();
        assert!(store.path().exists());
        assert_eq!(store.read("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_write_preserves_other_keys() {
        let (_temp, store) = setup();
        store.write("a", "1").unwrap();
        store.write("b", "2").unwrap();
        assert_eq!(store.read("a").unwrap(), Some("1".to_string()));
        assert_eq!(store.read("b").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let (_temp, store) = setup();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "not json").unwrap();
        assert_eq!(store.read("k").unwrap(), None);
    }

    #[test]
    fn test_persists_across_handles() {
        let (_temp, store) = setup();
        store.write("k", "v").unwrap();

        let reopened = FileStore::new(store.path());
        assert_eq!(reopened.read("k").unwrap(), Some("v".to_string()));
    }
}
