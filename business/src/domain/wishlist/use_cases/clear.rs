use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;

#[async_trait]
pub trait ClearWishlistUseCase: Send + Sync {
    async fn execute(&self) -> Result<Wishlist, WishlistError>;
}
