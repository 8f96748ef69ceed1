use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::catalog::model::{NewProductProps, Product};
use business::domain::catalog::value_objects::{Category, ProductBadges};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

/// Stored product record. Badge flags are only written when set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_best_seller: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub on_sale: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            category: product.category.to_string(),
            image: product.image.clone(),
            is_new: product.badges.is_new,
            is_best_seller: product.badges.is_best_seller,
            on_sale: product.badges.on_sale,
            rating: product.rating,
            review_count: product.review_count,
        }
    }

    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let category = self
            .category
            .parse::<Category>()
            .map_err(|_| RepositoryError::serialization())?;

        Product::new(NewProductProps {
            id: ProductId::new(self.id),
            name: self.name,
            price: self.price,
            description: self.description,
            category,
            image: self.image,
            badges: ProductBadges {
                is_new: self.is_new,
                is_best_seller: self.is_best_seller,
                on_sale: self.on_sale,
            },
            rating: self.rating,
            review_count: self.review_count,
        })
        .map_err(|_| RepositoryError::serialization())
    }
}
