use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::move_to_saved::{MoveToSavedParams, MoveToSavedUseCase};
use crate::domain::logger::Logger;
use crate::domain::notification::services::{IconHint, Notice, Notifier};

pub struct MoveToSavedUseCaseImpl {
    pub state: Arc<CartState>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl MoveToSavedUseCase for MoveToSavedUseCaseImpl {
    async fn execute(&self, params: MoveToSavedParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Saving product {} for later", params.product_id));

        let (name, cart) = self
            .state
            .update(|cart| {
                let name = cart
                    .line(&params.product_id)
                    .map(|l| l.product.name.clone());
                cart.move_to_saved(&params.product_id);
                (name, cart.clone())
            })
            .await;

        if let Some(name) = name {
            self.notifier
                .notify(Notice::new(
                    "Saved for later",
                    format!("{} moved to your saved items", name),
                    IconHint::Info,
                ))
                .await;
        }

        Ok(cart)
    }
}
