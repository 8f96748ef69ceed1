use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, MAX_QUANTITY, QuantityChange};
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::cart::value_objects::parse_quantity_input;
use crate::domain::logger::Logger;
use crate::domain::notification::services::{Cue, CuePlayer, IconHint, Notice, Notifier};

pub struct UpdateCartQuantityUseCaseImpl {
    pub state: Arc<CartState>,
    pub notifier: Arc<dyn Notifier>,
    pub cues: Arc<dyn CuePlayer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<Cart, CartError> {
        let Some(quantity) = parse_quantity_input(&params.quantity) else {
            self.logger.debug(&format!(
                "Ignoring non-numeric quantity {:?} for product {}",
                params.quantity, params.product_id
            ));
            return Ok(self.state.snapshot().await);
        };

        self.logger.info(&format!(
            "Setting quantity of product {} to {}",
            params.product_id, quantity
        ));
        if quantity > i64::from(MAX_QUANTITY) {
            self.logger.warn(&format!(
                "Quantity {} for product {} exceeds {}, clamping",
                quantity, params.product_id, MAX_QUANTITY
            ));
        }

        let (name, change, cart) = self
            .state
            .update(|cart| {
                let name = cart
                    .line(&params.product_id)
                    .map(|l| l.product.name.clone());
                let change = cart.update_quantity(&params.product_id, quantity);
                (name, change, cart.clone())
            })
            .await;

        match change {
            QuantityChange::Updated { from, to } if from != to => {
                self.notifier
                    .notify(Notice::new(
                        "Quantity updated",
                        format!(
                            "{} quantity changed to {}",
                            name.unwrap_or_default(),
                            to
                        ),
                        IconHint::Check,
                    ))
                    .await;
            }
            QuantityChange::Removed(line) => {
                self.notifier
                    .notify(Notice::new(
                        "Item removed",
                        format!("{} removed from your cart", line.product.name),
                        IconHint::Remove,
                    ))
                    .await;
                self.cues.play(Cue::Remove);
            }
            QuantityChange::Updated { .. } => {}
            QuantityChange::Missing => self.logger.debug(&format!(
                "Product {} was not in the cart",
                params.product_id
            )),
        }

        Ok(cart)
    }
}
