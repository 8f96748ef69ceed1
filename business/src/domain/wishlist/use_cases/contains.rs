use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;
use crate::domain::wishlist::errors::WishlistError;

pub struct IsInWishlistParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait IsInWishlistUseCase: Send + Sync {
    async fn execute(&self, params: IsInWishlistParams) -> Result<bool, WishlistError>;
}
