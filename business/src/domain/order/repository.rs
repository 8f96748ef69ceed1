use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Order;
use super::value_objects::OrderId;

/// Append-only order history.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn get_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError>;
    async fn append(&self, order: &Order) -> Result<(), RepositoryError>;
}
