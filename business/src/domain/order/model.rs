use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::errors::OrderError;
use super::shipping::ShippingInfo;
use super::value_objects::{OrderId, OrderStatus};
use crate::domain::cart::model::{CartLine, lines_subtotal};

/// A placed order. Never modified once appended to the history.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub lines: Vec<CartLine>,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub shipping_info: ShippingInfo,
}

pub struct PlaceOrderProps {
    pub id: OrderId,
    pub lines: Vec<CartLine>,
    pub shipping_info: ShippingInfo,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Builds an order from a cart snapshot. Shipping is free and no tax
    /// applies, so the total equals the subtotal.
    pub fn place(props: PlaceOrderProps) -> Result<Self, OrderError> {
        if props.lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let subtotal = lines_subtotal(&props.lines);
        let shipping = Decimal::ZERO;

        Ok(Self {
            id: props.id,
            lines: props.lines,
            subtotal,
            shipping,
            total: subtotal.saturating_add(shipping),
            status: OrderStatus::Processing,
            created_at: props.created_at,
            shipping_info: props.shipping_info,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: OrderId,
        lines: Vec<CartLine>,
        subtotal: Decimal,
        shipping: Decimal,
        total: Decimal,
        status: OrderStatus,
        created_at: DateTime<Utc>,
        shipping_info: ShippingInfo,
    ) -> Self {
        Self {
            id,
            lines,
            subtotal,
            shipping,
            total,
            status,
            created_at,
            shipping_info,
        }
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}
