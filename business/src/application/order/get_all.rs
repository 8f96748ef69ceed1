use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_all::GetAllOrdersUseCase;

pub struct GetAllOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllOrdersUseCase for GetAllOrdersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Order>, OrderError> {
        self.logger.info("Fetching order history");
        let mut orders = self.repository.get_all().await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.logger.info(&format!("Found {} orders", orders.len()));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartLine;
    use crate::domain::catalog::model::fixtures::product;
    use crate::domain::order::model::PlaceOrderProps;
    use crate::domain::order::shipping::ShippingInfo;
    use crate::domain::order::shipping::fixtures::valid_props;
    use crate::domain::order::value_objects::OrderId;
    use crate::test_support::{MockOrderRepo, mock_logger};
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn should_list_newest_first() {
        let now = Utc::now();
        let stored: Vec<Order> = [("A", 2), ("B", 0), ("C", 1)]
            .into_iter()
            .map(|(id, hours_ago)| {
                Order::place(PlaceOrderProps {
                    id: OrderId::new(id),
                    lines: vec![CartLine::new(product("1", Decimal::ONE))],
                    shipping_info: ShippingInfo::new(valid_props()).unwrap(),
                    created_at: now - Duration::hours(hours_ago),
                })
                .unwrap()
            })
            .collect();
        let mut repository = MockOrderRepo::new();
        repository
            .expect_get_all()
            .returning(move || Ok(stored.clone()));
        let use_case = GetAllOrdersUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let orders = use_case.execute().await.unwrap();

        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "C", "A"]);
    }

    #[tokio::test]
    async fn should_return_empty_history() {
        let mut repository = MockOrderRepo::new();
        repository.expect_get_all().returning(|| Ok(vec![]));
        let use_case = GetAllOrdersUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.unwrap().is_empty());
    }
}
