use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::WishlistState;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::use_cases::get::GetWishlistUseCase;

pub struct GetWishlistUseCaseImpl {
    pub state: Arc<WishlistState>,
}

#[async_trait]
impl GetWishlistUseCase for GetWishlistUseCaseImpl {
    async fn execute(&self) -> Result<Wishlist, WishlistError> {
        Ok(self.state.snapshot().await)
    }
}
