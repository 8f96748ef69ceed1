use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::move_to_cart::{MoveToCartParams, MoveToCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::notification::services::{IconHint, Notice, Notifier};

pub struct MoveToCartUseCaseImpl {
    pub state: Arc<CartState>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl MoveToCartUseCase for MoveToCartUseCaseImpl {
    async fn execute(&self, params: MoveToCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Moving saved product {} back to cart",
            params.product_id
        ));

        let (name, cart) = self
            .state
            .update(|cart| {
                let name = cart
                    .saved_lines()
                    .iter()
                    .find(|l| l.product_id() == &params.product_id)
                    .map(|l| l.product.name.clone());
                cart.move_to_cart(&params.product_id);
                (name, cart.clone())
            })
            .await;

        if let Some(name) = name {
            self.notifier
                .notify(Notice::new(
                    "Moved to cart",
                    format!("{} moved back to your cart", name),
                    IconHint::Cart,
                ))
                .await;
        }

        Ok(cart)
    }
}
