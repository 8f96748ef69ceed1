use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::WishlistState;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::services::{IconHint, Notice, Notifier};
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::use_cases::add::{AddToWishlistParams, AddToWishlistUseCase};

pub struct AddToWishlistUseCaseImpl {
    pub state: Arc<WishlistState>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToWishlistUseCase for AddToWishlistUseCaseImpl {
    async fn execute(&self, params: AddToWishlistParams) -> Result<Wishlist, WishlistError> {
        self.logger
            .info(&format!("Adding product {} to wishlist", params.product_id));

        let product = self
            .catalog
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => WishlistError::ProductNotFound,
                other => WishlistError::Repository(other),
            })?;
        let name = product.name.clone();

        let (added, wishlist) = self
            .state
            .update(|wishlist| (wishlist.add(product), wishlist.clone()))
            .await;

        if added {
            self.notifier
                .notify(Notice::new(
                    "Added to Wishlist",
                    format!("{} has been added to your wishlist.", name),
                    IconHint::Heart,
                ))
                .await;
        } else {
            self.logger.debug(&format!(
                "Product {} already in wishlist",
                params.product_id
            ));
        }

        Ok(wishlist)
    }
}
