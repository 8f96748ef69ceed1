use rust_decimal::Decimal;

use super::errors::CatalogError;
use super::value_objects::{Category, ProductBadges};
use crate::domain::shared::value_objects::ProductId;

/// Highest unit price a product may carry.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category: Category,
    pub image: String,
    pub badges: ProductBadges,
    pub rating: Option<f32>,
    pub review_count: Option<u32>,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category: Category,
    pub image: String,
    pub badges: ProductBadges,
    pub rating: Option<f32>,
    pub review_count: Option<u32>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, CatalogError> {
        if props.name.trim().is_empty() {
            return Err(CatalogError::NameEmpty);
        }

        if props.price < Decimal::ZERO {
            return Err(CatalogError::NegativePrice);
        }

        if props.price > MAX_PRICE {
            return Err(CatalogError::PriceTooHigh);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            price: props.price,
            description: props.description,
            category: props.category,
            image: props.image,
            badges: props.badges,
            rating: props.rating,
            review_count: props.review_count,
        })
    }

    /// Featured products are best-sellers or new arrivals.
    pub fn is_featured(&self) -> bool {
        self.badges.is_best_seller || self.badges.is_new
    }
}
