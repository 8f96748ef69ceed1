use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_featured::{
    GetFeaturedProductsParams, GetFeaturedProductsUseCase,
};
use crate::domain::logger::Logger;

pub struct GetFeaturedProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFeaturedProductsUseCase for GetFeaturedProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetFeaturedProductsParams,
    ) -> Result<Vec<Product>, CatalogError> {
        let featured: Vec<Product> = self
            .repository
            .get_all()
            .await?
            .into_iter()
            .filter(Product::is_featured)
            .take(params.limit)
            .collect();
        self.logger
            .debug(&format!("Selected {} featured products", featured.len()));
        Ok(featured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::product;
    use crate::domain::catalog::value_objects::ProductBadges;
    use crate::test_support::{catalog_with, mock_logger};
    use rust_decimal::Decimal;

    fn badged(id: &str, is_new: bool, is_best_seller: bool) -> Product {
        Product {
            badges: ProductBadges {
                is_new,
                is_best_seller,
                on_sale: false,
            },
            ..product(id, Decimal::ONE)
        }
    }

    #[tokio::test]
    async fn should_keep_catalog_order_and_limit() {
        let use_case = GetFeaturedProductsUseCaseImpl {
            repository: catalog_with(vec![
                badged("1", true, false),
                badged("2", false, false),
                badged("3", false, true),
                badged("4", true, true),
                badged("5", true, false),
                badged("6", false, true),
            ]),
            logger: mock_logger(),
        };

        let featured = use_case
            .execute(GetFeaturedProductsParams::default())
            .await
            .unwrap();

        let ids: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4", "5"]);
    }
}
