use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{AddOutcome, Cart};
use crate::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::services::{Cue, CuePlayer, IconHint, Notice, Notifier};

pub struct AddToCartUseCaseImpl {
    pub state: Arc<CartState>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub cues: Arc<dyn CuePlayer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Adding product {} to cart", params.product_id));

        let product = self
            .catalog
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;
        let name = product.name.clone();

        let (outcome, cart) = self
            .state
            .update(|cart| (cart.add(product), cart.clone()))
            .await;

        let notice = match outcome {
            AddOutcome::Added => Notice::new(
                "Item added to cart",
                format!("{} added to your cart", name),
                IconHint::Cart,
            ),
            AddOutcome::Incremented { quantity } => Notice::new(
                "Item quantity increased",
                format!("{} quantity increased to {}", name, quantity),
                IconHint::Check,
            ),
        };
        self.notifier.notify(notice).await;
        self.cues.play(Cue::Add);

        self.logger.info(&format!(
            "Cart now holds {} items across {} lines",
            cart.total_items(),
            cart.lines().len()
        ));
        Ok(cart)
    }
}
