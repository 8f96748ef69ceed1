use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::logger::Logger;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, CatalogError> {
        self.logger.info("Fetching catalog products");
        let mut products = self.repository.get_all().await?;
        if let Some(category) = params.category {
            products.retain(|p| p.category == category);
        }
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
