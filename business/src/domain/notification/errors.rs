#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
