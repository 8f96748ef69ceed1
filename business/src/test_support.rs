//! Mocks and fakes for the business ports.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use crate::application::shared::persisted_state::{CartState, NotificationState, WishlistState};
use crate::domain::cart::model::Cart;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::model::NotificationInbox;
use crate::domain::notification::services::{Cue, CuePlayer, Notice, Notifier};
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::services::OrderIdGenerator;
use crate::domain::order::value_objects::OrderId;
use crate::domain::shared::repository::StateRepository;
use crate::domain::shared::services::{Clock, Delay};
use crate::domain::shared::value_objects::ProductId;
use crate::domain::wishlist::model::Wishlist;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

mock! {
    pub CatalogRepo {}

    #[async_trait]
    impl CatalogRepository for CatalogRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    }
}

/// Catalog mock serving a fixed product list.
pub fn catalog_with(products: Vec<Product>) -> Arc<dyn CatalogRepository> {
    let mut repository = MockCatalogRepo::new();
    let all = products.clone();
    repository
        .expect_get_all()
        .returning(move || Ok(all.clone()));
    repository.expect_get_by_id().returning(move |id| {
        products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    });
    Arc::new(repository)
}

mock! {
    pub CartRepo {}

    #[async_trait]
    impl StateRepository<Cart> for CartRepo {
        async fn load(&self) -> Result<Option<Cart>, RepositoryError>;
        async fn save(&self, state: &Cart) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub OrderRepo {}

    #[async_trait]
    impl OrderRepository for OrderRepo {
        async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
        async fn get_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError>;
        async fn append(&self, order: &Order) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub NotifierPort {}

    #[async_trait]
    impl Notifier for NotifierPort {
        async fn notify(&self, notice: Notice);
    }
}

mock! {
    pub Cues {}

    impl CuePlayer for Cues {
        fn play(&self, cue: Cue);
    }
}

mock! {
    pub IdGenerator {}

    impl OrderIdGenerator for IdGenerator {
        fn generate(&self) -> OrderId;
    }
}

mock! {
    pub DelayPort {}

    #[async_trait]
    impl Delay for DelayPort {
        async fn wait(&self, duration: std::time::Duration);
    }
}

/// Notifier that records every notice it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn titles(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Cue player that records what was played.
#[derive(Default)]
pub struct RecordingCues {
    played: Mutex<Vec<Cue>>,
}

impl RecordingCues {
    pub fn played(&self) -> Vec<Cue> {
        self.played.lock().unwrap().clone()
    }
}

impl CuePlayer for RecordingCues {
    fn play(&self, cue: Cue) {
        self.played.lock().unwrap().push(cue);
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// In-memory stand-in for a state repository.
pub struct FakeStateRepository<T> {
    stored: Mutex<Option<T>>,
    saves: Mutex<usize>,
}

impl<T: Clone> FakeStateRepository<T> {
    pub fn empty() -> Self {
        Self {
            stored: Mutex::new(None),
            saves: Mutex::new(0),
        }
    }

    pub fn with(state: T) -> Self {
        Self {
            stored: Mutex::new(Some(state)),
            saves: Mutex::new(0),
        }
    }

    pub fn stored(&self) -> Option<T> {
        self.stored.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> StateRepository<T> for FakeStateRepository<T> {
    async fn load(&self) -> Result<Option<T>, RepositoryError> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, state: &T) -> Result<(), RepositoryError> {
        *self.stored.lock().unwrap() = Some(state.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

pub fn cart_state(cart: Cart) -> (Arc<CartState>, Arc<FakeStateRepository<Cart>>) {
    let repository = Arc::new(FakeStateRepository::with(cart.clone()));
    let state = Arc::new(CartState::with_state(
        "cart",
        cart,
        repository.clone(),
        mock_logger(),
    ));
    (state, repository)
}

pub fn wishlist_state(
    wishlist: Wishlist,
) -> (Arc<WishlistState>, Arc<FakeStateRepository<Wishlist>>) {
    let repository = Arc::new(FakeStateRepository::with(wishlist.clone()));
    let state = Arc::new(WishlistState::with_state(
        "wishlist",
        wishlist,
        repository.clone(),
        mock_logger(),
    ));
    (state, repository)
}

pub fn notification_state(
    inbox: NotificationInbox,
) -> (Arc<NotificationState>, Arc<FakeStateRepository<NotificationInbox>>) {
    let repository = Arc::new(FakeStateRepository::with(inbox.clone()));
    let state = Arc::new(NotificationState::with_state(
        "notifications",
        inbox,
        repository.clone(),
        mock_logger(),
    ));
    (state, repository)
}
