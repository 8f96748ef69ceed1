use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;

pub const DEFAULT_FEATURED_LIMIT: usize = 4;

pub struct GetFeaturedProductsParams {
    pub limit: usize,
}

impl Default for GetFeaturedProductsParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FEATURED_LIMIT,
        }
    }
}

#[async_trait]
pub trait GetFeaturedProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetFeaturedProductsParams,
    ) -> Result<Vec<Product>, CatalogError>;
}
