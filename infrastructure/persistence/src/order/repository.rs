use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;
use business::domain::order::value_objects::OrderId;

use super::entity::OrderEntity;
use crate::document::JsonDocument;
use crate::keys::StorageKey;

/// Order history kept as one JSON array under `orders`, oldest first.
pub struct OrderRepositoryJson {
    document: Arc<JsonDocument>,
    // Serialises the read-append-write cycle.
    append_lock: Mutex<()>,
}

impl OrderRepositoryJson {
    pub fn new(document: Arc<JsonDocument>) -> Self {
        Self {
            document,
            append_lock: Mutex::new(()),
        }
    }

    async fn entities(&self) -> Vec<OrderEntity> {
        self.document
            .load(StorageKey::Orders)
            .await
            .unwrap_or_default()
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryJson {
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        self.entities()
            .await
            .into_iter()
            .map(OrderEntity::into_domain)
            .collect()
    }

    async fn get_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        self.entities()
            .await
            .into_iter()
            .find(|e| e.id == id.as_str())
            .map(OrderEntity::into_domain)
            .transpose()
    }

    async fn append(&self, order: &Order) -> Result<(), RepositoryError> {
        let _guard = self.append_lock.lock().await;
        let mut entities = self.entities().await;
        entities.push(OrderEntity::from_domain(order));
        self.document.save(StorageKey::Orders, &entities).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::repository::StaticCatalogRepository;
    use crate::store::{InMemoryKeyValueStore, KeyValueStore};
    use business::domain::cart::model::CartLine;
    use business::domain::catalog::repository::CatalogRepository;
    use business::domain::logger::NoopLogger;
    use business::domain::order::model::PlaceOrderProps;
    use business::domain::order::shipping::{NewShippingInfoProps, ShippingInfo};
    use business::domain::shared::value_objects::ProductId;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn repository(store: Arc<InMemoryKeyValueStore>) -> OrderRepositoryJson {
        OrderRepositoryJson::new(Arc::new(JsonDocument::new(store, Arc::new(NoopLogger))))
    }

    async fn order(id: &str) -> Order {
        let catalog = StaticCatalogRepository::embedded().unwrap();
        let product = catalog.get_by_id(&ProductId::new("2")).await.unwrap();
        Order::place(PlaceOrderProps {
            id: OrderId::new(id),
            lines: vec![CartLine::from_repository(product, 3)],
            shipping_info: ShippingInfo::new(NewShippingInfoProps {
                full_name: "Jane Roe".to_string(),
                email: "jane@example.com".to_string(),
                address: "1 Elm St".to_string(),
                city: "Springfield".to_string(),
                postal_code: "12345".to_string(),
                country: "US".to_string(),
            })
            .unwrap(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_append_and_find_orders() {
        let store = Arc::new(InMemoryKeyValueStore::default());
        let repository = repository(store.clone());

        repository.append(&order("AAA").await).await.unwrap();
        repository.append(&order("BBB").await).await.unwrap();

        let all = repository.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id.as_str(), "AAA");

        let found = repository
            .get_by_id(&OrderId::new("BBB"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, order("BBB").await);
        assert_eq!(found.total, Decimal::new(38997, 2));
        assert!(
            repository
                .get_by_id(&OrderId::new("CCC"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn should_store_camel_case_order_document() {
        let store = Arc::new(InMemoryKeyValueStore::default());
        repository(store.clone())
            .append(&order("XYZ").await)
            .await
            .unwrap();

        let raw = store.read("orders").await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let stored = &json[0];
        assert_eq!(stored["status"], "Processing");
        assert_eq!(stored["shipping"], 0.0);
        assert_eq!(stored["items"][0]["quantity"], 3);
        assert_eq!(stored["shippingInfo"]["postalCode"], "12345");
        assert_eq!(stored["createdAt"], "2026-01-02T03:04:05Z");
    }

    #[tokio::test]
    async fn should_read_history_written_by_browser_storefront() {
        let store = Arc::new(InMemoryKeyValueStore::default());
        store
            .write(
                "orders",
                r#"[{"id":"K3J9QZ0PL","items":[{"id":"3","name":"Cotton T-Shirt","price":19.99,"description":"","category":"Clothing","image":"","onSale":true,"quantity":2}],"subtotal":39.98,"shipping":0,"total":39.98,"status":"Processing","createdAt":"2024-05-01T10:00:00.000Z","shippingInfo":{"fullName":"A","email":"a@b.co","address":"x","city":"y","postalCode":"z","country":"w"}}]"#,
            )
            .await
            .unwrap();

        let orders = repository(store).get_all().await.unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].total, Decimal::new(3998, 2));
        assert_eq!(orders[0].item_count(), 2);
    }
}
