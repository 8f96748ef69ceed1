use poem_openapi::{Enum, Object};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::catalog::model::Product;
use business::domain::catalog::value_objects::Category;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum CategoryDto {
    Electronics,
    Clothing,
    Home,
    Books,
    Sports,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        match category {
            Category::Electronics => CategoryDto::Electronics,
            Category::Clothing => CategoryDto::Clothing,
            Category::Home => CategoryDto::Home,
            Category::Books => CategoryDto::Books,
            Category::Sports => CategoryDto::Sports,
        }
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        match dto {
            CategoryDto::Electronics => Category::Electronics,
            CategoryDto::Clothing => Category::Clothing,
            CategoryDto::Home => Category::Home,
            CategoryDto::Books => Category::Books,
            CategoryDto::Sports => Category::Sports,
        }
    }
}

/// Money amounts leave the API as plain JSON numbers.
pub fn money(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: CategoryDto,
    /// Image URL
    pub image: String,
    pub is_new: bool,
    pub is_best_seller: bool,
    pub on_sale: bool,
    /// Average rating out of 5
    #[oai(skip_serializing_if_is_none)]
    pub rating: Option<f32>,
    #[oai(skip_serializing_if_is_none)]
    pub review_count: Option<u32>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            price: money(product.price),
            description: product.description,
            category: product.category.into(),
            image: product.image,
            is_new: product.badges.is_new,
            is_best_seller: product.badges.is_best_seller,
            on_sale: product.badges.on_sale,
            rating: product.rating,
            review_count: product.review_count,
        }
    }
}
