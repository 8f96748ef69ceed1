use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::get::GetCartUseCase;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub state: Arc<CartState>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> Result<Cart, CartError> {
        let cart = self.state.snapshot().await;
        self.logger
            .debug(&format!("Cart has {} lines", cart.lines().len()));
        Ok(cart)
    }
}
