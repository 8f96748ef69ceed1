use async_trait::async_trait;

use business::domain::catalog::model::Product;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

use super::entity::ProductEntity;

const EMBEDDED_CATALOG: &str = include_str!("catalog.json");

/// Read-only catalog parsed once from a JSON document.
pub struct StaticCatalogRepository {
    products: Vec<Product>,
}

impl StaticCatalogRepository {
    /// Catalog shipped with the binary.
    pub fn embedded() -> Result<Self, RepositoryError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, RepositoryError> {
        let entities: Vec<ProductEntity> =
            serde_json::from_str(raw).map_err(|_| RepositoryError::serialization())?;
        let products = entities
            .into_iter()
            .map(ProductEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { products })
    }
}

#[async_trait]
impl CatalogRepository for StaticCatalogRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}
