use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::errors::RepositoryError;
use business::domain::shared::repository::StateRepository;

use super::entity::{CartLineEntity, lines_into_domain};
use crate::document::JsonDocument;
use crate::keys::StorageKey;

/// Keeps cart lines under `cart` and saved-for-later lines under `savedItems`.
pub struct CartRepositoryJson {
    document: Arc<JsonDocument>,
}

impl CartRepositoryJson {
    pub fn new(document: Arc<JsonDocument>) -> Self {
        Self { document }
    }
}

#[async_trait]
impl StateRepository<Cart> for CartRepositoryJson {
    async fn load(&self) -> Result<Option<Cart>, RepositoryError> {
        let lines: Option<Vec<CartLineEntity>> = self.document.load(StorageKey::Cart).await;
        let saved: Option<Vec<CartLineEntity>> =
            self.document.load(StorageKey::SavedItems).await;

        if lines.is_none() && saved.is_none() {
            return Ok(None);
        }

        Ok(Some(Cart::from_repository(
            lines_into_domain(lines.unwrap_or_default())?,
            lines_into_domain(saved.unwrap_or_default())?,
        )))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let lines: Vec<CartLineEntity> = cart
            .lines()
            .iter()
            .map(CartLineEntity::from_domain)
            .collect();
        let saved: Vec<CartLineEntity> = cart
            .saved_lines()
            .iter()
            .map(CartLineEntity::from_domain)
            .collect();

        self.document.save(StorageKey::Cart, &lines).await?;
        self.document.save(StorageKey::SavedItems, &saved).await
    }
}
