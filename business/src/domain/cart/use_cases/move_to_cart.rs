use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct MoveToCartParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait MoveToCartUseCase: Send + Sync {
    async fn execute(&self, params: MoveToCartParams) -> Result<Cart, CartError>;
}
