use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::recommend::{
    RecommendProductsParams, RecommendProductsUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::services::Delay;

pub struct RecommendProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub delay: Arc<dyn Delay>,
    /// Simulated lookup latency.
    pub latency: Duration,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecommendProductsUseCase for RecommendProductsUseCaseImpl {
    async fn execute(
        &self,
        params: RecommendProductsParams,
    ) -> Result<Vec<Product>, CatalogError> {
        self.delay.wait(self.latency).await;

        let catalog = self.repository.get_all().await?;
        let current = params.current_product_id.as_ref();
        let is_current = |p: &Product| current.is_some_and(|id| &p.id == id);

        let mut picks: Vec<Product> = catalog
            .iter()
            .filter(|p| !is_current(*p))
            .filter(|p| params.category.is_none_or(|c| p.category == c))
            .cloned()
            .collect();

        if picks.len() < params.limit {
            let missing = params.limit - picks.len();
            let best_sellers: Vec<Product> = catalog
                .iter()
                .filter(|p| p.badges.is_best_seller && !is_current(*p))
                .filter(|p| !picks.iter().any(|pick| pick.id == p.id))
                .take(missing)
                .cloned()
                .collect();
            picks.extend(best_sellers);
        }

        picks.shuffle(&mut rand::rng());
        picks.truncate(params.limit);

        self.logger.debug(&format!(
            "Recommending {} products (current: {:?}, category: {:?})",
            picks.len(),
            current.map(|id| id.as_str()),
            params.category
        ));
        Ok(picks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::product;
    use crate::domain::catalog::value_objects::{Category, ProductBadges};
    use crate::domain::shared::value_objects::ProductId;
    use crate::test_support::{MockDelayPort, catalog_with, mock_logger};
    use rust_decimal::Decimal;

    fn item(id: &str, category: Category, is_best_seller: bool) -> Product {
        Product {
            category,
            badges: ProductBadges {
                is_best_seller,
                ..ProductBadges::default()
            },
            ..product(id, Decimal::ONE)
        }
    }

    fn use_case() -> RecommendProductsUseCaseImpl {
        let mut delay = MockDelayPort::new();
        delay
            .expect_wait()
            .withf(|d| *d == Duration::from_millis(1000))
            .times(1)
            .returning(|_| ());
        RecommendProductsUseCaseImpl {
            repository: catalog_with(vec![
                item("1", Category::Books, false),
                item("2", Category::Books, false),
                item("3", Category::Home, true),
                item("4", Category::Sports, true),
                item("5", Category::Sports, false),
                item("6", Category::Home, false),
            ]),
            delay: Arc::new(delay),
            latency: Duration::from_millis(1000),
            logger: mock_logger(),
        }
    }

    fn ids(products: &[Product]) -> Vec<String> {
        let mut ids: Vec<String> = products.iter().map(|p| p.id.to_string()).collect();
        ids.sort();
        ids
    }

    #[tokio::test]
    async fn should_top_up_category_with_best_sellers() {
        let picks = use_case()
            .execute(RecommendProductsParams {
                current_product_id: Some(ProductId::new("1")),
                category: Some(Category::Books),
                limit: 4,
            })
            .await
            .unwrap();

        assert_eq!(ids(&picks), vec!["2", "3", "4"]);
    }

    #[tokio::test]
    async fn should_never_recommend_current_product() {
        let picks = use_case()
            .execute(RecommendProductsParams {
                current_product_id: Some(ProductId::new("3")),
                category: None,
                limit: 10,
            })
            .await
            .unwrap();

        assert_eq!(picks.len(), 5);
        assert!(picks.iter().all(|p| p.id.as_str() != "3"));
    }

    #[tokio::test]
    async fn should_respect_limit() {
        let picks = use_case()
            .execute(RecommendProductsParams {
                current_product_id: None,
                category: None,
                limit: 4,
            })
            .await
            .unwrap();

        assert_eq!(picks.len(), 4);
        let mut unique = ids(&picks);
        unique.dedup();
        assert_eq!(unique.len(), 4);
    }
}
