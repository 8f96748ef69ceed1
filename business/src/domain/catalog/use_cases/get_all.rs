use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::value_objects::Category;

pub struct GetAllProductsParams {
    pub category: Option<Category>,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, CatalogError>;
}
