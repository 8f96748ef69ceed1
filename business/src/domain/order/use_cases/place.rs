use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::shipping::NewShippingInfoProps;

pub struct PlaceOrderParams {
    pub shipping_info: NewShippingInfoProps,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError>;
}
