use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::WishlistState;
use crate::domain::logger::Logger;
use crate::domain::notification::services::{IconHint, Notice, Notifier};
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::use_cases::clear::ClearWishlistUseCase;

pub struct ClearWishlistUseCaseImpl {
    pub state: Arc<WishlistState>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearWishlistUseCase for ClearWishlistUseCaseImpl {
    async fn execute(&self) -> Result<Wishlist, WishlistError> {
        let (removed, wishlist) = self
            .state
            .update(|wishlist| (wishlist.clear(), wishlist.clone()))
            .await;

        self.logger
            .info(&format!("Cleared {} products from wishlist", removed));
        self.notifier
            .notify(Notice::new(
                "Wishlist Cleared",
                "All items have been removed from your wishlist.",
                IconHint::Alert,
            ))
            .await;

        Ok(wishlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::product;
    use crate::test_support::{RecordingNotifier, mock_logger, wishlist_state};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn should_empty_wishlist() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product("1", Decimal::ONE));
        let (state, repository) = wishlist_state(wishlist);
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = ClearWishlistUseCaseImpl {
            state,
            notifier: notifier.clone(),
            logger: mock_logger(),
        };

        let wishlist = use_case.execute().await.unwrap();

        assert!(wishlist.is_empty());
        assert!(repository.stored().unwrap().is_empty());
        assert_eq!(notifier.titles(), vec!["Wishlist Cleared"]);
    }
}
