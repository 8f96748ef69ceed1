use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::CartState;
use crate::domain::logger::Logger;
use crate::domain::notification::services::{Cue, CuePlayer, IconHint, Notice, Notifier};
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, PlaceOrderProps};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::services::OrderIdGenerator;
use crate::domain::order::shipping::ShippingInfo;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::order::value_objects::OrderId;
use crate::domain::shared::services::Clock;

/// Draws before giving up on finding an unused order id.
pub const MAX_ID_ATTEMPTS: usize = 5;

pub struct PlaceOrderUseCaseImpl {
    pub cart: Arc<CartState>,
    pub repository: Arc<dyn OrderRepository>,
    pub id_generator: Arc<dyn OrderIdGenerator>,
    pub clock: Arc<dyn Clock>,
    pub notifier: Arc<dyn Notifier>,
    pub cues: Arc<dyn CuePlayer>,
    pub logger: Arc<dyn Logger>,
}

impl PlaceOrderUseCaseImpl {
    async fn unused_id(&self) -> Result<OrderId, OrderError> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.id_generator.generate();
            if self.repository.get_by_id(&id).await?.is_none() {
                return Ok(id);
            }
            self.logger.warn(&format!(
                "Order id {} already taken (attempt {}/{})",
                id, attempt, MAX_ID_ATTEMPTS
            ));
        }
        Err(OrderError::IdCollision)
    }
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError> {
        let shipping_info =
            ShippingInfo::new(params.shipping_info).map_err(OrderError::InvalidShippingInfo)?;

        // Cart stays locked until cleared; other cart changes wait for the order.
        let mut cart = self.cart.lock().await;
        let lines = cart.lines().to_vec();
        if lines.is_empty() {
            self.logger.warn("Refusing to place an order for an empty cart");
            return Err(OrderError::EmptyCart);
        }

        let id = self.unused_id().await?;
        let order = Order::place(PlaceOrderProps {
            id,
            lines,
            shipping_info,
            created_at: self.clock.now(),
        })?;

        self.logger.info(&format!(
            "Placing order {} for {} items, total {}",
            order.id,
            order.item_count(),
            order.total
        ));
        if let Err(e) = self.repository.append(&order).await {
            self.logger
                .error(&format!("Failed to store order {}: {}", order.id, e));
            return Err(e.into());
        }

        cart.clear();
        cart.persist().await;
        drop(cart);

        self.notifier
            .notify(Notice::new(
                "Order placed successfully!",
                format!("Your order #{} has been placed.", order.id),
                IconHint::Check,
            ))
            .await;
        self.cues.play(Cue::Success);

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::catalog::model::fixtures::product;
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::shipping::NewShippingInfoProps;
    use crate::domain::order::shipping::fixtures::valid_props;
    use crate::domain::order::value_objects::OrderStatus;
    use crate::domain::shared::value_objects::ProductId;
    use crate::test_support::{
        FixedClock, MockIdGenerator, MockOrderRepo, RecordingCues, RecordingNotifier, cart_state,
        mock_logger,
    };
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn stocked_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(product("1", Decimal::new(1999, 2)));
        cart.update_quantity(&ProductId::new("1"), 2);
        cart.add(product("2", Decimal::new(500, 2)));
        cart.add(product("3", Decimal::ONE));
        cart.move_to_saved(&ProductId::new("3"));
        cart
    }

    fn fixed_ids(ids: &[&str]) -> MockIdGenerator {
        let mut generator = MockIdGenerator::new();
        let mut queue: Vec<OrderId> = ids.iter().rev().map(|id| OrderId::new(*id)).collect();
        generator
            .expect_generate()
            .returning(move || queue.pop().unwrap_or_else(|| OrderId::new("LAST")));
        generator
    }

    struct Harness {
        use_case: PlaceOrderUseCaseImpl,
        cart: Arc<CartState>,
        notifier: Arc<RecordingNotifier>,
        cues: Arc<RecordingCues>,
    }

    fn harness(cart: Cart, repository: MockOrderRepo, ids: MockIdGenerator) -> Harness {
        let (cart, _) = cart_state(cart);
        let notifier = Arc::new(RecordingNotifier::default());
        let cues = Arc::new(RecordingCues::default());
        let use_case = PlaceOrderUseCaseImpl {
            cart: cart.clone(),
            repository: Arc::new(repository),
            id_generator: Arc::new(ids),
            clock: Arc::new(FixedClock(
                Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
            )),
            notifier: notifier.clone(),
            cues: cues.clone(),
            logger: mock_logger(),
        };
        Harness {
            use_case,
            cart,
            notifier,
            cues,
        }
    }

    fn params(props: NewShippingInfoProps) -> PlaceOrderParams {
        PlaceOrderParams {
            shipping_info: props,
        }
    }

    #[tokio::test]
    async fn should_place_order_and_clear_cart() {
        let mut repository = MockOrderRepo::new();
        repository.expect_get_by_id().returning(|_| Ok(None));
        repository
            .expect_append()
            .withf(|order| order.id.as_str() == "ABC123XYZ")
            .times(1)
            .returning(|_| Ok(()));
        let h = harness(stocked_cart(), repository, fixed_ids(&["ABC123XYZ"]));

        let order = h.use_case.execute(params(valid_props())).await.unwrap();

        assert_eq!(order.id.as_str(), "ABC123XYZ");
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.subtotal, Decimal::new(4498, 2));
        assert_eq!(order.shipping, Decimal::ZERO);
        assert_eq!(order.total, order.subtotal);
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(
            order.created_at,
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
        );

        let cart = h.cart.snapshot().await;
        assert!(cart.is_empty());
        assert_eq!(cart.saved_lines().len(), 1);
        assert_eq!(h.notifier.titles(), vec!["Order placed successfully!"]);
        assert_eq!(
            h.notifier.notices()[0].description,
            "Your order #ABC123XYZ has been placed."
        );
        assert_eq!(h.cues.played(), vec![Cue::Success]);
    }

    #[tokio::test]
    async fn should_reject_invalid_shipping_info() {
        let mut repository = MockOrderRepo::new();
        repository.expect_append().never();
        let h = harness(stocked_cart(), repository, fixed_ids(&[]));

        let result = h
            .use_case
            .execute(params(NewShippingInfoProps {
                email: "not-an-email".to_string(),
                ..valid_props()
            }))
            .await;

        match result.unwrap_err() {
            OrderError::InvalidShippingInfo(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].code, "checkout.email_invalid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!h.cart.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn should_reject_empty_cart() {
        let mut repository = MockOrderRepo::new();
        repository.expect_append().never();
        let h = harness(Cart::new(), repository, fixed_ids(&[]));

        let result = h.use_case.execute(params(valid_props())).await;

        assert!(matches!(result.unwrap_err(), OrderError::EmptyCart));
        assert!(h.notifier.titles().is_empty());
    }

    #[tokio::test]
    async fn should_redraw_taken_ids() {
        let mut repository = MockOrderRepo::new();
        repository
            .expect_get_by_id()
            .returning(|id| match id.as_str() {
                "TAKEN" => Ok(Some(sample_order(id.clone()))),
                _ => Ok(None),
            });
        repository.expect_append().returning(|_| Ok(()));
        let h = harness(stocked_cart(), repository, fixed_ids(&["TAKEN", "FRESH"]));

        let order = h.use_case.execute(params(valid_props())).await.unwrap();

        assert_eq!(order.id.as_str(), "FRESH");
    }

    #[tokio::test]
    async fn should_give_up_after_repeated_collisions() {
        let mut repository = MockOrderRepo::new();
        repository
            .expect_get_by_id()
            .times(MAX_ID_ATTEMPTS)
            .returning(|id| Ok(Some(sample_order(id.clone()))));
        repository.expect_append().never();
        let h = harness(stocked_cart(), repository, fixed_ids(&[]));

        let result = h.use_case.execute(params(valid_props())).await;

        assert!(matches!(result.unwrap_err(), OrderError::IdCollision));
        assert!(!h.cart.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn should_keep_cart_when_order_cannot_be_stored() {
        let mut repository = MockOrderRepo::new();
        repository.expect_get_by_id().returning(|_| Ok(None));
        repository
            .expect_append()
            .returning(|_| Err(RepositoryError::persistence()));
        let h = harness(stocked_cart(), repository, fixed_ids(&["ABC"]));

        let result = h.use_case.execute(params(valid_props())).await;

        assert!(matches!(result.unwrap_err(), OrderError::Repository(_)));
        assert_eq!(h.cart.snapshot().await.lines().len(), 2);
        assert!(h.cues.played().is_empty());
    }

    /// Order history whose appends take a while to land.
    #[derive(Default)]
    struct SlowOrderRepo {
        orders: std::sync::Mutex<Vec<Order>>,
    }

    #[async_trait]
    impl OrderRepository for SlowOrderRepo {
        async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
            Ok(self.orders.lock().unwrap().clone())
        }

        async fn get_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
            Ok(self
                .orders
                .lock()
                .unwrap()
                .iter()
                .find(|o| &o.id == id)
                .cloned())
        }

        async fn append(&self, order: &Order) -> Result<(), RepositoryError> {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            self.orders.lock().unwrap().push(order.clone());
            Ok(())
        }
    }

    fn slow_use_case(
        cart: Arc<CartState>,
        repository: Arc<SlowOrderRepo>,
    ) -> PlaceOrderUseCaseImpl {
        let mut ids = MockIdGenerator::new();
        let mut counter = 0;
        ids.expect_generate().returning(move || {
            counter += 1;
            OrderId::new(format!("ORDER{}", counter))
        });
        PlaceOrderUseCaseImpl {
            cart,
            repository,
            id_generator: Arc::new(ids),
            clock: Arc::new(FixedClock(Utc::now())),
            notifier: Arc::new(RecordingNotifier::default()),
            cues: Arc::new(RecordingCues::default()),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_keep_item_added_while_order_is_being_stored() {
        let mut cart = Cart::new();
        cart.add(product("1", Decimal::ONE));
        let (cart, _) = cart_state(cart);
        let repository = Arc::new(SlowOrderRepo::default());
        let use_case = Arc::new(slow_use_case(cart.clone(), repository.clone()));

        let placing = tokio::spawn({
            let use_case = use_case.clone();
            async move { use_case.execute(params(valid_props())).await }
        });
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        cart.update(|c| c.add(product("2", Decimal::ONE))).await;

        let order = placing.await.unwrap().unwrap();
        let order_ids: Vec<&str> = order.lines.iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(order_ids, vec!["1"]);
        let after = cart.snapshot().await;
        assert_eq!(after.lines().len(), 1);
        assert!(after.line(&ProductId::new("2")).is_some());
    }

    #[tokio::test]
    async fn should_order_the_same_cart_only_once() {
        let (cart, _) = cart_state(stocked_cart());
        let repository = Arc::new(SlowOrderRepo::default());
        let use_case = Arc::new(slow_use_case(cart.clone(), repository.clone()));

        let first = tokio::spawn({
            let use_case = use_case.clone();
            async move { use_case.execute(params(valid_props())).await }
        });
        let second = tokio::spawn({
            let use_case = use_case.clone();
            async move { use_case.execute(params(valid_props())).await }
        });
        let results = [first.await.unwrap(), second.await.unwrap()];

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(
            results
                .iter()
                .any(|r| matches!(r, Err(OrderError::EmptyCart)))
        );
        assert_eq!(repository.get_all().await.unwrap().len(), 1);
    }

    fn sample_order(id: OrderId) -> Order {
        Order::place(PlaceOrderProps {
            id,
            lines: stocked_cart().lines().to_vec(),
            shipping_info: ShippingInfo::new(valid_props()).unwrap(),
            created_at: Utc::now(),
        })
        .unwrap()
    }
}
