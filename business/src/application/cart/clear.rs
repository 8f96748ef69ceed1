use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::notification::services::{IconHint, Notice, Notifier};

pub struct ClearCartUseCaseImpl {
    pub state: Arc<CartState>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self) -> Result<Cart, CartError> {
        let (removed, cart) = self
            .state
            .update(|cart| (cart.clear(), cart.clone()))
            .await;

        self.logger
            .info(&format!("Cleared {} lines from cart", removed.len()));
        self.notifier
            .notify(Notice::new(
                "Cart cleared",
                "All items have been removed from your cart",
                IconHint::Alert,
            ))
            .await;

        Ok(cart)
    }
}
