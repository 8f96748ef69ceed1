use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::domain::cart::model::Cart;
use crate::domain::logger::Logger;
use crate::domain::notification::model::NotificationInbox;
use crate::domain::shared::repository::StateRepository;
use crate::domain::wishlist::model::Wishlist;

pub type CartState = PersistedState<Cart>;
pub type WishlistState = PersistedState<Wishlist>;
pub type NotificationState = PersistedState<NotificationInbox>;

/// In-memory client state mirrored to a repository.
///
/// Memory is the source of truth. Every `update` writes the whole state back
/// while still holding the lock, so stored documents follow the mutation order.
/// A failed write is logged and the in-memory change is kept.
pub struct PersistedState<T> {
    name: &'static str,
    state: Mutex<T>,
    repository: Arc<dyn StateRepository<T>>,
    logger: Arc<dyn Logger>,
}

impl<T> PersistedState<T>
where
    T: Default + Clone + Send + Sync + 'static,
{
    /// Loads the stored state, falling back to `T::default()` when nothing
    /// usable is stored or the store cannot be read.
    pub async fn restore(
        name: &'static str,
        repository: Arc<dyn StateRepository<T>>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let state = match repository.load().await {
            Ok(Some(state)) => {
                logger.info(&format!("Restored {} from storage", name));
                state
            }
            Ok(None) => {
                logger.debug(&format!("No stored {}, starting empty", name));
                T::default()
            }
            Err(e) => {
                logger.error(&format!("Failed to load {}, starting empty: {}", name, e));
                T::default()
            }
        };

        Self::with_state(name, state, repository, logger)
    }

    pub fn with_state(
        name: &'static str,
        state: T,
        repository: Arc<dyn StateRepository<T>>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            name,
            state: Mutex::new(state),
            repository,
            logger,
        }
    }

    pub async fn snapshot(&self) -> T {
        self.state.lock().await.clone()
    }

    pub async fn read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.state.lock().await;
        f(&*guard)
    }

    /// Applies `f` and writes the resulting state back.
    pub async fn update<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R + Send,
        R: Send,
    {
        let mut guard = self.state.lock().await;
        let result = f(&mut *guard);
        self.persist(&guard).await;
        result
    }

    /// Locks the state until the returned guard is dropped, so a caller can
    /// await other work between reading and changing it. Changes made
    /// through the guard are only stored by `StateGuard::persist`.
    pub async fn lock(&self) -> StateGuard<'_, T> {
        StateGuard {
            guard: self.state.lock().await,
            owner: self,
        }
    }

    async fn persist(&self, state: &T) {
        if let Err(e) = self.repository.save(state).await {
            self.logger
                .error(&format!("Failed to persist {}: {}", self.name, e));
        }
    }
}

/// Exclusive access to a `PersistedState`.
pub struct StateGuard<'a, T> {
    guard: MutexGuard<'a, T>,
    owner: &'a PersistedState<T>,
}

impl<T> StateGuard<'_, T>
where
    T: Default + Clone + Send + Sync + 'static,
{
    /// Writes the current state back; failures are logged like `update`.
    pub async fn persist(&self) {
        self.owner.persist(&self.guard).await;
    }
}

impl<T> std::ops::Deref for StateGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> std::ops::DerefMut for StateGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}
