#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.product_not_found")]
    ProductNotFound,
    #[error("catalog.name_empty")]
    NameEmpty,
    #[error("catalog.negative_price")]
    NegativePrice,
    #[error("catalog.price_too_high")]
    PriceTooHigh,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
