use super::shipping::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.not_found")]
    NotFound,
    #[error("order.empty_cart")]
    EmptyCart,
    #[error("checkout.invalid_shipping_info")]
    InvalidShippingInfo(Vec<FieldError>),
    #[error("order.id_collision")]
    IdCollision,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
