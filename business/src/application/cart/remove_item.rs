use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::remove_item::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::notification::services::{Cue, CuePlayer, IconHint, Notice, Notifier};

pub struct RemoveFromCartUseCaseImpl {
    pub state: Arc<CartState>,
    pub notifier: Arc<dyn Notifier>,
    pub cues: Arc<dyn CuePlayer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Removing product {} from cart", params.product_id));

        let (removed, cart) = self
            .state
            .update(|cart| (cart.remove(&params.product_id), cart.clone()))
            .await;

        match removed {
            Some(line) => {
                self.notifier
                    .notify(Notice::new(
                        "Item removed",
                        format!("{} removed from your cart", line.product.name),
                        IconHint::Remove,
                    ))
                    .await;
                self.cues.play(Cue::Remove);
            }
            None => self.logger.debug(&format!(
                "Product {} was not in the cart",
                params.product_id
            )),
        }

        Ok(cart)
    }
}
