use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::OrderId;

pub struct GetOrderByIdParams {
    pub id: OrderId,
}

#[async_trait]
pub trait GetOrderByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetOrderByIdParams) -> Result<Order, OrderError>;
}
