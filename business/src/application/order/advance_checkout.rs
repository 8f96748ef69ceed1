use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::checkout::{CheckoutDirection, CheckoutStep};
use crate::domain::order::errors::OrderError;
use crate::domain::order::use_cases::advance_checkout::{
    AdvanceCheckoutParams, AdvanceCheckoutUseCase,
};

pub struct AdvanceCheckoutUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AdvanceCheckoutUseCase for AdvanceCheckoutUseCaseImpl {
    async fn execute(&self, params: AdvanceCheckoutParams) -> Result<CheckoutStep, OrderError> {
        let next = match params.direction {
            CheckoutDirection::Next => params
                .step
                .next(&params.shipping_info)
                .map_err(OrderError::InvalidShippingInfo)?,
            CheckoutDirection::Back => params.step.previous(),
        };
        self.logger
            .debug(&format!("Checkout step {} -> {}", params.step, next));
        Ok(next)
    }
}
