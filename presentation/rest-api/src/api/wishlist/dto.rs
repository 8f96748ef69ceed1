use poem_openapi::Object;

use business::domain::wishlist::model::Wishlist;

use crate::api::catalog::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct AddToWishlistRequest {
    pub product_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct WishlistResponse {
    pub items: Vec<ProductResponse>,
    pub count: u32,
}

impl From<Wishlist> for WishlistResponse {
    fn from(wishlist: Wishlist) -> Self {
        Self {
            count: wishlist.len() as u32,
            items: wishlist
                .products()
                .iter()
                .cloned()
                .map(ProductResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct WishlistMembershipResponse {
    pub in_wishlist: bool,
}
