use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store.io_error")]
    Io(#[from] std::io::Error),
}

/// Durable string storage addressed by key. Every write replaces the
/// whole value.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn write(&self, key: &str, raw: &str) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Which store implementation backs the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(format!("Invalid storage backend: {}", s)),
        }
    }
}

/// Configuration for the document store
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub directory: PathBuf,
}

impl StorageConfig {
    /// Creates a file-backed configuration rooted at `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            backend: StorageBackend::File,
            directory: directory.into(),
        }
    }
}

/// Builds the store described by the configuration
pub fn open_store(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::File => Arc::new(FileKeyValueStore::new(config.directory.clone())),
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::default()),
    }
}

/// One `<key>.json` file per key inside a directory.
pub struct FileKeyValueStore {
    directory: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match tokio::fs::read_to_string(self.path(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.directory).await?;

        // Readers only ever see a complete document.
        let target = self.path(key);
        let staging = self.directory.join(format!("{}.json.tmp", key));
        tokio::fs::write(&staging, raw).await?;
        tokio::fs::rename(&staging, &target).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match tokio::fs::remove_file(self.path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, raw: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_none_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().to_path_buf());

        assert!(store.read("cart").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_overwrite_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("nested"));

        store.write("cart", "[1,2,3]").await.unwrap();
        store.write("cart", "[]").await.unwrap();

        assert_eq!(store.read("cart").await.unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested").join("cart.json").exists());
        assert!(!dir.path().join("nested").join("cart.json.tmp").exists());
    }

    #[tokio::test]
    async fn should_remove_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().to_path_buf());
        store.write("wishlist", "[]").await.unwrap();

        store.remove("wishlist").await.unwrap();
        store.remove("wishlist").await.unwrap();

        assert!(store.read("wishlist").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_keep_keys_independent_in_memory() {
        let store = InMemoryKeyValueStore::default();

        store.write("cart", "a").await.unwrap();
        store.write("orders", "b").await.unwrap();
        store.remove("cart").await.unwrap();

        assert!(store.read("cart").await.unwrap().is_none());
        assert_eq!(store.read("orders").await.unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn should_parse_backend_names() {
        assert_eq!(
            "memory".parse::<StorageBackend>().unwrap(),
            StorageBackend::Memory
        );
        assert_eq!("FILE".parse::<StorageBackend>().unwrap(), StorageBackend::File);
        assert!("redis".parse::<StorageBackend>().is_err());
    }
}
