use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct MoveToSavedParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait MoveToSavedUseCase: Send + Sync {
    async fn execute(&self, params: MoveToSavedParams) -> Result<Cart, CartError>;
}
