use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, CatalogError> {
        self.logger
            .info(&format!("Fetching product with id: {}", params.id));
        self.repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    self.logger
                        .warn(&format!("Product not found: {}", params.id));
                    CatalogError::ProductNotFound
                }
                other => CatalogError::Repository(other),
            })
    }
}
