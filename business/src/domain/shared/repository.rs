use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Repository for a piece of client state stored as one document.
///
/// `load` returns `None` when nothing usable is stored (missing or malformed);
/// `save` always replaces the whole document.
#[async_trait]
pub trait StateRepository<T>: Send + Sync {
    async fn load(&self) -> Result<Option<T>, RepositoryError>;
    async fn save(&self, state: &T) -> Result<(), RepositoryError>;
}
