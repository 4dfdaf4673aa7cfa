use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use tracing::debug;

use super::PersistenceError;

/// A durable string slot per key. Writes overwrite the whole value.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// In-memory store backed by `Arc<RwLock<HashMap>>`.
///
/// Cloning shares the same underlying storage, which lets a test keep a handle
/// on what the cart wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    storage: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| PersistenceError::LockPoisoned("store read"))?;
        Ok(storage.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| PersistenceError::LockPoisoned("store write"))?;
        storage.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One JSON file per key under a directory.
///
/// File names are the hex-encoded key, so distinct keys never share a file.
///
/// Values are written to a sibling temporary file and renamed into place, so a
/// reader never sees a half-written snapshot.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", hex::encode(key)))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), bytes = value.len(), "Snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_clone_shares_storage() {
        let store = InMemoryStore::new();
        let clone = store.clone();

        store.write("k", "v1").unwrap();
        clone.write("k", "v2").unwrap();

        assert_eq!(store.read("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.read("missing").unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.read("@RocketShoes:cart").unwrap(), None);

        store.write("@RocketShoes:cart", "[1]").unwrap();
        store.write("@RocketShoes:cart", "[2]").unwrap();

        assert_eq!(store.read("@RocketShoes:cart").unwrap().as_deref(), Some("[2]"));
        let file = format!("{}.json", hex::encode("@RocketShoes:cart"));
        assert!(dir.path().join("nested").join(&file).exists());
        assert!(!dir.path().join("nested").join(format!("{}.tmp", file)).exists());
    }

    #[test]
    fn test_file_store_keys_with_similar_names_stay_apart() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.write("@Shop:cart", "[1]").unwrap();
        store.write("_Shop_cart", "[2]").unwrap();

        assert_eq!(store.read("@Shop:cart").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.read("_Shop_cart").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_file_store_survives_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::new(dir.path()).write("cart", "[]").unwrap();

        let reopened = FileStore::new(dir.path());

        assert_eq!(reopened.read("cart").unwrap().as_deref(), Some("[]"));
    }
}
