use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::WishlistState;
use crate::domain::logger::Logger;
use crate::domain::notification::services::{IconHint, Notice, Notifier};
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::use_cases::remove::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

pub struct RemoveFromWishlistUseCaseImpl {
    pub state: Arc<WishlistState>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromWishlistUseCase for RemoveFromWishlistUseCaseImpl {
    async fn execute(&self, params: RemoveFromWishlistParams) -> Result<Wishlist, WishlistError> {
        self.logger.info(&format!(
            "Removing product {} from wishlist",
            params.product_id
        ));

        let (removed, wishlist) = self
            .state
            .update(|wishlist| (wishlist.remove(&params.product_id), wishlist.clone()))
            .await;

        if removed.is_some() {
            self.notifier
                .notify(Notice::new(
                    "Removed from Wishlist",
                    "Item has been removed from your wishlist.",
                    IconHint::Remove,
                ))
                .await;
        }

        Ok(wishlist)
    }
}
