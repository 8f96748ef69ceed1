use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::notification::model::NotificationInbox;
use business::domain::shared::repository::StateRepository;

use super::entity::NotificationEntity;
use crate::document::JsonDocument;
use crate::keys::StorageKey;

pub struct NotificationRepositoryJson {
    document: Arc<JsonDocument>,
}

impl NotificationRepositoryJson {
    pub fn new(document: Arc<JsonDocument>) -> Self {
        Self { document }
    }
}

#[async_trait]
impl StateRepository<NotificationInbox> for NotificationRepositoryJson {
    async fn load(&self) -> Result<Option<NotificationInbox>, RepositoryError> {
        let entities: Option<Vec<NotificationEntity>> =
            self.document.load(StorageKey::Notifications).await;
        Ok(entities.map(|entities| {
            NotificationInbox::from_repository(
                entities
                    .into_iter()
                    .map(NotificationEntity::into_domain)
                    .collect(),
            )
        }))
    }

    async fn save(&self, inbox: &NotificationInbox) -> Result<(), RepositoryError> {
        let entities: Vec<NotificationEntity> = inbox
            .items()
            .iter()
            .map(NotificationEntity::from_domain)
            .collect();
        self.document
            .save(StorageKey::Notifications, &entities)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryKeyValueStore, KeyValueStore};
    use business::domain::logger::NoopLogger;
    use business::domain::notification::model::{Notification, NotificationKind};
    use chrono::Utc;

    fn repository(store: Arc<InMemoryKeyValueStore>) -> NotificationRepositoryJson {
        NotificationRepositoryJson::new(Arc::new(JsonDocument::new(store, Arc::new(NoopLogger))))
    }

    #[tokio::test]
    async fn should_round_trip_inbox() {
        let store = Arc::new(InMemoryKeyValueStore::default());
        let mut inbox = NotificationInbox::new();
        inbox.push(Notification::new(
            NotificationKind::Success,
            "Item added to cart".to_string(),
            "Yoga Mat added to your cart".to_string(),
            Utc::now(),
        ));
        let repository = repository(store.clone());

        repository.save(&inbox).await.unwrap();
        let restored = repository.load().await.unwrap().unwrap();

        assert_eq!(restored, inbox);
        let raw = store.read("notifications").await.unwrap().unwrap();
        assert!(raw.contains("\"type\":\"success\""));
    }

    #[tokio::test]
    async fn should_start_empty_without_document() {
        let store = Arc::new(InMemoryKeyValueStore::default());

        assert!(repository(store).load().await.unwrap().is_none());
    }
}
