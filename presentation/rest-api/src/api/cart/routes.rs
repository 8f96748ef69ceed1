use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get::GetCartUseCase;
use business::domain::cart::use_cases::move_to_cart::{MoveToCartParams, MoveToCartUseCase};
use business::domain::cart::use_cases::move_to_saved::{MoveToSavedParams, MoveToSavedUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveFromCartParams, RemoveFromCartUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{AddToCartRequest, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_use_case: Arc<dyn AddToCartUseCase>,
    remove_use_case: Arc<dyn RemoveFromCartUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    move_to_saved_use_case: Arc<dyn MoveToSavedUseCase>,
    move_to_cart_use_case: Arc<dyn MoveToCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_use_case: Arc<dyn AddToCartUseCase>,
        remove_use_case: Arc<dyn RemoveFromCartUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        move_to_saved_use_case: Arc<dyn MoveToSavedUseCase>,
        move_to_cart_use_case: Arc<dyn MoveToCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_use_case,
            remove_use_case,
            update_quantity_use_case,
            clear_use_case,
            move_to_saved_use_case,
            move_to_cart_use_case,
        }
    }
}

fn respond(result: Result<Cart, CartError>) -> CartApiResponse {
    match result {
        Ok(cart) => CartApiResponse::Ok(Json(cart.into())),
        Err(err) => {
            let (status, json) = err.into_error_response();
            match status.as_u16() {
                404 => CartApiResponse::NotFound(json),
                _ => CartApiResponse::InternalError(json),
            }
        }
    }
}

/// Shopping cart API
///
/// Every endpoint answers with the full cart, totals included.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> CartApiResponse {
        respond(self.get_use_case.execute().await)
    }

    /// Clear the cart
    ///
    /// Removes every cart line. Saved-for-later items stay.
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self) -> CartApiResponse {
        respond(self.clear_use_case.execute().await)
    }

    /// Add a product to the cart
    ///
    /// Adds one unit; a product already in the cart gets its quantity bumped.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, body: Json<AddToCartRequest>) -> CartApiResponse {
        let params = AddToCartParams {
            product_id: ProductId::new(body.0.product_id),
        };
        respond(self.add_use_case.execute(params).await)
    }

    /// Remove a product from the cart
    #[oai(path = "/cart/items/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, product_id: Path<String>) -> CartApiResponse {
        let params = RemoveFromCartParams {
            product_id: ProductId::new(product_id.0),
        };
        respond(self.remove_use_case.execute(params).await)
    }

    /// Set a line's quantity
    ///
    /// The quantity is taken as typed. Zero or less removes the line and
    /// non-numeric input leaves the cart unchanged.
    #[oai(
        path = "/cart/items/:product_id/quantity/:quantity",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_quantity(
        &self,
        product_id: Path<String>,
        quantity: Path<String>,
    ) -> CartApiResponse {
        let params = UpdateCartQuantityParams {
            product_id: ProductId::new(product_id.0),
            quantity: quantity.0,
        };
        respond(self.update_quantity_use_case.execute(params).await)
    }

    /// Save a cart line for later
    #[oai(
        path = "/cart/items/:product_id/save-for-later",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn move_to_saved(&self, product_id: Path<String>) -> CartApiResponse {
        let params = MoveToSavedParams {
            product_id: ProductId::new(product_id.0),
        };
        respond(self.move_to_saved_use_case.execute(params).await)
    }

    /// Move a saved item back into the cart
    #[oai(
        path = "/cart/saved/:product_id/move-to-cart",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn move_to_cart(&self, product_id: Path<String>) -> CartApiResponse {
        let params = MoveToCartParams {
            product_id: ProductId::new(product_id.0),
        };
        respond(self.move_to_cart_use_case.execute(params).await)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartApiResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
