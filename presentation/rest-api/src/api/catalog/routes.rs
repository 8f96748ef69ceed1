use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::catalog::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::catalog::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::catalog::use_cases::get_featured::{
    DEFAULT_FEATURED_LIMIT, GetFeaturedProductsParams, GetFeaturedProductsUseCase,
};
use business::domain::catalog::use_cases::recommend::{
    DEFAULT_RECOMMENDATION_LIMIT, RecommendProductsParams, RecommendProductsUseCase,
};
use business::domain::catalog::value_objects::Category;
use business::domain::shared::value_objects::ProductId;

use crate::api::catalog::dto::{CategoryDto, ProductResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_featured_use_case: Arc<dyn GetFeaturedProductsUseCase>,
    recommend_use_case: Arc<dyn RecommendProductsUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_featured_use_case: Arc<dyn GetFeaturedProductsUseCase>,
        recommend_use_case: Arc<dyn RecommendProductsUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            get_featured_use_case,
            recommend_use_case,
        }
    }
}

/// Product catalog API
///
/// Read-only access to the storefront's products.
#[OpenApi]
impl CatalogApi {
    /// List categories
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn get_categories(&self) -> Json<Vec<CategoryDto>> {
        Json(Category::ALL.into_iter().map(CategoryDto::from).collect())
    }

    /// List products
    ///
    /// Returns the catalog in its fixed order, optionally narrowed to one category.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Catalog")]
    async fn get_all_products(&self, category: Query<Option<CategoryDto>>) -> ProductListResponse {
        let params = GetAllProductsParams {
            category: category.0.map(Category::from),
        };
        match self.get_all_use_case.execute(params).await {
            Ok(products) => {
                ProductListResponse::Ok(Json(products.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => ProductListResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Featured products
    ///
    /// Best-sellers and new arrivals, in catalog order.
    #[oai(path = "/products/featured", method = "get", tag = "ApiTags::Catalog")]
    async fn get_featured_products(&self, limit: Query<Option<u32>>) -> ProductListResponse {
        let params = GetFeaturedProductsParams {
            limit: limit.0.map_or(DEFAULT_FEATURED_LIMIT, |l| l as usize),
        };
        match self.get_featured_use_case.execute(params).await {
            Ok(products) => {
                ProductListResponse::Ok(Json(products.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => ProductListResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Catalog")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductResponse {
        let params = GetProductByIdParams {
            id: ProductId::new(id.0),
        };
        match self.get_by_id_use_case.execute(params).await {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Recommendations for a product
    ///
    /// Other products worth a look, shuffled. Responds after a simulated delay.
    #[oai(
        path = "/products/:id/recommendations",
        method = "get",
        tag = "ApiTags::Catalog"
    )]
    async fn get_recommendations(
        &self,
        id: Path<String>,
        category: Query<Option<CategoryDto>>,
        limit: Query<Option<u32>>,
    ) -> ProductListResponse {
        let params = RecommendProductsParams {
            current_product_id: Some(ProductId::new(id.0)),
            category: category.0.map(Category::from),
            limit: limit.0.map_or(DEFAULT_RECOMMENDATION_LIMIT, |l| l as usize),
        };
        match self.recommend_use_case.execute(params).await {
            Ok(products) => {
                ProductListResponse::Ok(Json(products.into_iter().map(|p| p.into()).collect()))
            }
            Err(err) => ProductListResponse::InternalError(err.into_error_response().1),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
