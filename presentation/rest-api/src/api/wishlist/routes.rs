use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::value_objects::ProductId;
use business::domain::wishlist::errors::WishlistError;
use business::domain::wishlist::model::Wishlist;
use business::domain::wishlist::use_cases::add::{AddToWishlistParams, AddToWishlistUseCase};
use business::domain::wishlist::use_cases::clear::ClearWishlistUseCase;
use business::domain::wishlist::use_cases::contains::{IsInWishlistParams, IsInWishlistUseCase};
use business::domain::wishlist::use_cases::get::GetWishlistUseCase;
use business::domain::wishlist::use_cases::remove::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::{
    AddToWishlistRequest, WishlistMembershipResponse, WishlistResponse,
};

pub struct WishlistApi {
    get_use_case: Arc<dyn GetWishlistUseCase>,
    add_use_case: Arc<dyn AddToWishlistUseCase>,
    remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
    contains_use_case: Arc<dyn IsInWishlistUseCase>,
    clear_use_case: Arc<dyn ClearWishlistUseCase>,
}

impl WishlistApi {
    pub fn new(
        get_use_case: Arc<dyn GetWishlistUseCase>,
        add_use_case: Arc<dyn AddToWishlistUseCase>,
        remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
        contains_use_case: Arc<dyn IsInWishlistUseCase>,
        clear_use_case: Arc<dyn ClearWishlistUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_use_case,
            remove_use_case,
            contains_use_case,
            clear_use_case,
        }
    }
}

fn respond(result: Result<Wishlist, WishlistError>) -> WishlistApiResponse {
    match result {
        Ok(wishlist) => WishlistApiResponse::Ok(Json(wishlist.into())),
        Err(err) => {
            let (status, json) = err.into_error_response();
            match status.as_u16() {
                404 => WishlistApiResponse::NotFound(json),
                _ => WishlistApiResponse::InternalError(json),
            }
        }
    }
}

/// Wishlist API
#[OpenApi]
impl WishlistApi {
    /// Get the wishlist
    #[oai(path = "/wishlist", method = "get", tag = "ApiTags::Wishlist")]
    async fn get_wishlist(&self) -> WishlistApiResponse {
        respond(self.get_use_case.execute().await)
    }

    /// Clear the wishlist
    #[oai(path = "/wishlist", method = "delete", tag = "ApiTags::Wishlist")]
    async fn clear_wishlist(&self) -> WishlistApiResponse {
        respond(self.clear_use_case.execute().await)
    }

    /// Add a product to the wishlist
    ///
    /// Adding a product that is already listed changes nothing.
    #[oai(path = "/wishlist/items", method = "post", tag = "ApiTags::Wishlist")]
    async fn add_item(&self, body: Json<AddToWishlistRequest>) -> WishlistApiResponse {
        let params = AddToWishlistParams {
            product_id: ProductId::new(body.0.product_id),
        };
        respond(self.add_use_case.execute(params).await)
    }

    /// Remove a product from the wishlist
    #[oai(
        path = "/wishlist/items/:product_id",
        method = "delete",
        tag = "ApiTags::Wishlist"
    )]
    async fn remove_item(&self, product_id: Path<String>) -> WishlistApiResponse {
        let params = RemoveFromWishlistParams {
            product_id: ProductId::new(product_id.0),
        };
        respond(self.remove_use_case.execute(params).await)
    }

    /// Check whether a product is on the wishlist
    #[oai(
        path = "/wishlist/items/:product_id",
        method = "get",
        tag = "ApiTags::Wishlist"
    )]
    async fn contains_item(&self, product_id: Path<String>) -> WishlistMembershipApiResponse {
        let params = IsInWishlistParams {
            product_id: ProductId::new(product_id.0),
        };

        match self.contains_use_case.execute(params).await {
            Ok(in_wishlist) => {
                WishlistMembershipApiResponse::Ok(Json(WishlistMembershipResponse { in_wishlist }))
            }
            Err(err) => {
                let (_, json) = err.into_error_response();
                WishlistMembershipApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum WishlistApiResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum WishlistMembershipApiResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistMembershipResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
