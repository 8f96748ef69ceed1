use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryJson;
use persistence::catalog::repository::StaticCatalogRepository;
use persistence::document::JsonDocument;
use persistence::notification::repository::NotificationRepositoryJson;
use persistence::order::repository::OrderRepositoryJson;
use persistence::store::open_store;
use persistence::wishlist::repository::WishlistRepositoryJson;
use system::clock::SystemClock;
use system::cue_player::TracingCuePlayer;
use system::delay::TokioDelay;
use system::order_id::{OrderIdScheme, RandomTokenIdGenerator, TimeOrderedIdGenerator};

use business::application::cart::add_item::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::move_to_cart::MoveToCartUseCaseImpl;
use business::application::cart::move_to_saved::MoveToSavedUseCaseImpl;
use business::application::cart::remove_item::RemoveFromCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::catalog::get_all::GetAllProductsUseCaseImpl;
use business::application::catalog::get_by_id::GetProductByIdUseCaseImpl;
use business::application::catalog::get_featured::GetFeaturedProductsUseCaseImpl;
use business::application::catalog::recommend::RecommendProductsUseCaseImpl;
use business::application::notification::clear::ClearNotificationsUseCaseImpl;
use business::application::notification::delete::DeleteNotificationUseCaseImpl;
use business::application::notification::get_all::GetNotificationsUseCaseImpl;
use business::application::notification::inbox_notifier::InboxNotifier;
use business::application::notification::mark_all_read::MarkAllNotificationsReadUseCaseImpl;
use business::application::notification::mark_read::MarkNotificationReadUseCaseImpl;
use business::application::order::advance_checkout::AdvanceCheckoutUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::shared::persisted_state::{
    CartState, NotificationState, WishlistState,
};
use business::application::wishlist::add::AddToWishlistUseCaseImpl;
use business::application::wishlist::clear::ClearWishlistUseCaseImpl;
use business::application::wishlist::contains::IsInWishlistUseCaseImpl;
use business::application::wishlist::get::GetWishlistUseCaseImpl;
use business::application::wishlist::remove::RemoveFromWishlistUseCaseImpl;
use business::domain::order::services::OrderIdGenerator;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub wishlist_api: crate::api::wishlist::routes::WishlistApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub notification_api: crate::api::notification::routes::NotificationApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let store = open_store(&config.storage);
        let document = Arc::new(JsonDocument::new(
            store,
            Arc::new(TracingLogger::scoped("storage")),
        ));
        let catalog_repository = Arc::new(StaticCatalogRepository::embedded()?);
        let order_repository = Arc::new(OrderRepositoryJson::new(document.clone()));
        let clock = Arc::new(SystemClock);
        let cues = Arc::new(TracingCuePlayer);
        let id_generator: Arc<dyn OrderIdGenerator> = match config.simulation.order_id_scheme {
            OrderIdScheme::Token => Arc::new(RandomTokenIdGenerator),
            OrderIdScheme::TimeOrdered => Arc::new(TimeOrderedIdGenerator),
        };

        let catalog_logger = Arc::new(TracingLogger::scoped("catalog"));
        let cart_logger = Arc::new(TracingLogger::scoped("cart"));
        let wishlist_logger = Arc::new(TracingLogger::scoped("wishlist"));
        let order_logger = Arc::new(TracingLogger::scoped("order"));
        let notification_logger = Arc::new(TracingLogger::scoped("notification"));

        // Client state, restored before the first request
        let cart_state = Arc::new(
            CartState::restore(
                "cart",
                Arc::new(CartRepositoryJson::new(document.clone())),
                cart_logger.clone(),
            )
            .await,
        );
        let wishlist_state = Arc::new(
            WishlistState::restore(
                "wishlist",
                Arc::new(WishlistRepositoryJson::new(document.clone())),
                wishlist_logger.clone(),
            )
            .await,
        );
        let notification_state = Arc::new(
            NotificationState::restore(
                "notifications",
                Arc::new(NotificationRepositoryJson::new(document)),
                notification_logger.clone(),
            )
            .await,
        );

        let notifier = Arc::new(InboxNotifier {
            state: notification_state.clone(),
            clock: clock.clone(),
            logger: notification_logger.clone(),
        });

        // Catalog use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let get_featured_use_case = Arc::new(GetFeaturedProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: catalog_logger.clone(),
        });
        let recommend_use_case = Arc::new(RecommendProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            delay: Arc::new(TokioDelay),
            latency: config.simulation.latency,
            logger: catalog_logger,
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            state: cart_state.clone(),
            logger: cart_logger.clone(),
        });
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            state: cart_state.clone(),
            catalog: catalog_repository.clone(),
            notifier: notifier.clone(),
            cues: cues.clone(),
            logger: cart_logger.clone(),
        });
        let remove_from_cart_use_case = Arc::new(RemoveFromCartUseCaseImpl {
            state: cart_state.clone(),
            notifier: notifier.clone(),
            cues: cues.clone(),
            logger: cart_logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateCartQuantityUseCaseImpl {
            state: cart_state.clone(),
            notifier: notifier.clone(),
            cues: cues.clone(),
            logger: cart_logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            state: cart_state.clone(),
            notifier: notifier.clone(),
            logger: cart_logger.clone(),
        });
        let move_to_saved_use_case = Arc::new(MoveToSavedUseCaseImpl {
            state: cart_state.clone(),
            notifier: notifier.clone(),
            logger: cart_logger.clone(),
        });
        let move_to_cart_use_case = Arc::new(MoveToCartUseCaseImpl {
            state: cart_state.clone(),
            notifier: notifier.clone(),
            logger: cart_logger,
        });

        // Wishlist use cases
        let get_wishlist_use_case = Arc::new(GetWishlistUseCaseImpl {
            state: wishlist_state.clone(),
        });
        let add_to_wishlist_use_case = Arc::new(AddToWishlistUseCaseImpl {
            state: wishlist_state.clone(),
            catalog: catalog_repository,
            notifier: notifier.clone(),
            logger: wishlist_logger.clone(),
        });
        let remove_from_wishlist_use_case = Arc::new(RemoveFromWishlistUseCaseImpl {
            state: wishlist_state.clone(),
            notifier: notifier.clone(),
            logger: wishlist_logger.clone(),
        });
        let is_in_wishlist_use_case = Arc::new(IsInWishlistUseCaseImpl {
            state: wishlist_state.clone(),
        });
        let clear_wishlist_use_case = Arc::new(ClearWishlistUseCaseImpl {
            state: wishlist_state,
            notifier: notifier.clone(),
            logger: wishlist_logger,
        });

        // Order use cases
        let get_all_orders_use_case = Arc::new(GetAllOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: order_logger.clone(),
        });
        let get_order_by_id_use_case = Arc::new(GetOrderByIdUseCaseImpl {
            repository: order_repository.clone(),
            logger: order_logger.clone(),
        });
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            cart: cart_state,
            repository: order_repository,
            id_generator,
            clock,
            notifier,
            cues,
            logger: order_logger.clone(),
        });
        let advance_checkout_use_case = Arc::new(AdvanceCheckoutUseCaseImpl {
            logger: order_logger,
        });

        // Notification use cases
        let get_notifications_use_case = Arc::new(GetNotificationsUseCaseImpl {
            state: notification_state.clone(),
        });
        let mark_read_use_case = Arc::new(MarkNotificationReadUseCaseImpl {
            state: notification_state.clone(),
            logger: notification_logger.clone(),
        });
        let mark_all_read_use_case = Arc::new(MarkAllNotificationsReadUseCaseImpl {
            state: notification_state.clone(),
            logger: notification_logger.clone(),
        });
        let delete_notification_use_case = Arc::new(DeleteNotificationUseCaseImpl {
            state: notification_state.clone(),
            logger: notification_logger.clone(),
        });
        let clear_notifications_use_case = Arc::new(ClearNotificationsUseCaseImpl {
            state: notification_state,
            logger: notification_logger,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            get_all_products_use_case,
            get_product_by_id_use_case,
            get_featured_use_case,
            recommend_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_to_cart_use_case,
            remove_from_cart_use_case,
            update_quantity_use_case,
            clear_cart_use_case,
            move_to_saved_use_case,
            move_to_cart_use_case,
        );

        let wishlist_api = crate::api::wishlist::routes::WishlistApi::new(
            get_wishlist_use_case,
            add_to_wishlist_use_case,
            remove_from_wishlist_use_case,
            is_in_wishlist_use_case,
            clear_wishlist_use_case,
        );

        let order_api = crate::api::order::routes::OrderApi::new(
            get_all_orders_use_case,
            get_order_by_id_use_case,
            place_order_use_case,
            advance_checkout_use_case,
        );

        let notification_api = crate::api::notification::routes::NotificationApi::new(
            get_notifications_use_case,
            mark_read_use_case,
            mark_all_read_use_case,
            delete_notification_use_case,
            clear_notifications_use_case,
        );

        Ok(Self {
            health_api,
            catalog_api,
            cart_api,
            wishlist_api,
            order_api,
            notification_api,
        })
    }
}
