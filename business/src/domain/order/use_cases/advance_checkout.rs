use async_trait::async_trait;

use crate::domain::order::checkout::{CheckoutDirection, CheckoutStep};
use crate::domain::order::errors::OrderError;
use crate::domain::order::shipping::NewShippingInfoProps;

pub struct AdvanceCheckoutParams {
    pub step: CheckoutStep,
    pub direction: CheckoutDirection,
    pub shipping_info: NewShippingInfoProps,
}

#[async_trait]
pub trait AdvanceCheckoutUseCase: Send + Sync {
    async fn execute(&self, params: AdvanceCheckoutParams) -> Result<CheckoutStep, OrderError>;
}
