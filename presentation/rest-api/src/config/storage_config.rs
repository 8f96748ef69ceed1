use std::env;

use persistence::store::{StorageBackend, StorageConfig};

/// Document store configuration
///
/// Environment variables:
/// - STORAGE_BACKEND: "file" or "memory" (default: "file")
/// - STORAGE_DIR: Directory holding one JSON file per key (default: "./data")
pub fn from_env() -> StorageConfig {
    let directory = env::var("STORAGE_DIR").unwrap_or_else(|_| "./data".to_string());
    let backend = match env::var("STORAGE_BACKEND") {
        Ok(raw) => raw.parse::<StorageBackend>().unwrap_or_else(|e| {
            tracing::warn!("{}, using file storage", e);
            StorageBackend::File
        }),
        Err(_) => StorageBackend::File,
    };

    StorageConfig {
        backend,
        ..StorageConfig::new(directory)
    }
}
