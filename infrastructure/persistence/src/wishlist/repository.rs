use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::shared::repository::StateRepository;
use business::domain::wishlist::model::Wishlist;

use crate::catalog::entity::ProductEntity;
use crate::document::JsonDocument;
use crate::keys::StorageKey;

pub struct WishlistRepositoryJson {
    document: Arc<JsonDocument>,
}

impl WishlistRepositoryJson {
    pub fn new(document: Arc<JsonDocument>) -> Self {
        Self { document }
    }
}

#[async_trait]
impl StateRepository<Wishlist> for WishlistRepositoryJson {
    async fn load(&self) -> Result<Option<Wishlist>, RepositoryError> {
        let Some(entities) = self
            .document
            .load::<Vec<ProductEntity>>(StorageKey::Wishlist)
            .await
        else {
            return Ok(None);
        };

        let products = entities
            .into_iter()
            .map(ProductEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(Wishlist::from_repository(products)))
    }

    async fn save(&self, wishlist: &Wishlist) -> Result<(), RepositoryError> {
        let entities: Vec<ProductEntity> = wishlist
            .products()
            .iter()
            .map(ProductEntity::from_domain)
            .collect();
        self.document.save(StorageKey::Wishlist, &entities).await
    }
}
