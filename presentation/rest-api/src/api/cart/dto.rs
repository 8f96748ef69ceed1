use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLine};

use crate::api::catalog::dto::{ProductResponse, money};

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    pub product_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub product: ProductResponse,
    pub quantity: u32,
    /// Price times quantity
    pub line_total: f64,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            product: line.product.clone().into(),
            quantity: line.quantity,
            line_total: money(line.line_total()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    /// Saved-for-later lines; never counted in the totals
    pub saved_items: Vec<CartLineResponse>,
    pub total_items: u64,
    pub subtotal: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartLineResponse::from).collect(),
            saved_items: cart.saved_lines().iter().map(CartLineResponse::from).collect(),
            total_items: cart.total_items(),
            subtotal: money(cart.subtotal()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::model::{NewProductProps, Product};
    use business::domain::catalog::value_objects::{Category, ProductBadges};
    use business::domain::shared::value_objects::ProductId;
    use rust_decimal::Decimal;

    fn product(id: &str, price: Decimal) -> Product {
        Product::new(NewProductProps {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price,
            description: String::new(),
            category: Category::Books,
            image: String::new(),
            badges: ProductBadges::default(),
            rating: None,
            review_count: None,
        })
        .unwrap()
    }

    #[test]
    fn should_render_totals_without_saved_items() {
        let cart = Cart::from_repository(
            vec![CartLine::from_repository(product("1", Decimal::new(1999, 2)), 2)],
            vec![CartLine::from_repository(product("2", Decimal::new(500, 2)), 1)],
        );

        let response = CartResponse::from(cart);

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.saved_items.len(), 1);
        assert_eq!(response.total_items, 2);
        assert!((response.subtotal - 39.98).abs() < 1e-9);
        assert!((response.items[0].line_total - 39.98).abs() < 1e-9);
    }
}
