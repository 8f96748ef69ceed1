use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::WishlistState;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::use_cases::contains::{IsInWishlistParams, IsInWishlistUseCase};

pub struct IsInWishlistUseCaseImpl {
    pub state: Arc<WishlistState>,
}

#[async_trait]
impl IsInWishlistUseCase for IsInWishlistUseCaseImpl {
    async fn execute(&self, params: IsInWishlistParams) -> Result<bool, WishlistError> {
        Ok(self
            .state
            .read(|wishlist| wishlist.contains(&params.product_id))
            .await)
    }
}
