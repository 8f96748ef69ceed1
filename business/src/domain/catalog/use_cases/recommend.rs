use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::value_objects::Category;
use crate::domain::shared::value_objects::ProductId;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 4;

pub struct RecommendProductsParams {
    /// Product being viewed; never recommended back.
    pub current_product_id: Option<ProductId>,
    pub category: Option<Category>,
    pub limit: usize,
}

#[async_trait]
pub trait RecommendProductsUseCase: Send + Sync {
    async fn execute(&self, params: RecommendProductsParams)
    -> Result<Vec<Product>, CatalogError>;
}
