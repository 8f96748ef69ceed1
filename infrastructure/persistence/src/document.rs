use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;

use crate::keys::StorageKey;
use crate::store::KeyValueStore;

/// JSON codec over a key-value store.
///
/// Reads are best effort: a missing, unreadable or malformed document all
/// come back as `None` and only leave a log line behind.
pub struct JsonDocument {
    store: Arc<dyn KeyValueStore>,
    logger: Arc<dyn Logger>,
}

impl JsonDocument {
    pub fn new(store: Arc<dyn KeyValueStore>, logger: Arc<dyn Logger>) -> Self {
        Self { store, logger }
    }

    pub async fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let raw = match self.store.read(key.as_str()).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                self.logger
                    .error(&format!("Failed to read {} from storage: {}", key, e));
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                self.logger
                    .warn(&format!("Discarding malformed {} document: {}", key, e));
                None
            }
        }
    }

    pub async fn save<T: Serialize + ?Sized>(
        &self,
        key: StorageKey,
        value: &T,
    ) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(value).map_err(|e| {
            self.logger
                .error(&format!("Failed to encode {}: {}", key, e));
            RepositoryError::serialization()
        })?;
        self.store.write(key.as_str(), &raw).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to write {} to storage: {}", key, e));
            RepositoryError::persistence()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryKeyValueStore;
    use business::domain::logger::NoopLogger;

    fn document() -> (JsonDocument, Arc<InMemoryKeyValueStore>) {
        let store = Arc::new(InMemoryKeyValueStore::default());
        (JsonDocument::new(store.clone(), Arc::new(NoopLogger)), store)
    }

    #[tokio::test]
    async fn should_return_none_for_absent_key() {
        let (document, _) = document();

        let value: Option<Vec<u32>> = document.load(StorageKey::Orders).await;

        assert!(value.is_none());
    }

    #[tokio::test]
    async fn should_treat_malformed_json_as_absent() {
        let (document, store) = document();
        store.write("wishlist", "{not json").await.unwrap();

        let value: Option<Vec<u32>> = document.load(StorageKey::Wishlist).await;

        assert!(value.is_none());
    }

    #[tokio::test]
    async fn should_store_plain_json() {
        let (document, store) = document();

        document.save(StorageKey::Cart, &vec![1, 2]).await.unwrap();

        assert_eq!(store.read("cart").await.unwrap().as_deref(), Some("[1,2]"));
        let back: Option<Vec<u32>> = document.load(StorageKey::Cart).await;
        assert_eq!(back, Some(vec![1, 2]));
    }
}
