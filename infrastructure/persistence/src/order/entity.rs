use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::shipping::{NewShippingInfoProps, ShippingInfo};
use business::domain::order::value_objects::{OrderId, OrderStatus};

use crate::cart::entity::{CartLineEntity, lines_into_domain};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfoEntity {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEntity {
    pub id: String,
    pub items: Vec<CartLineEntity>,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub shipping_info: ShippingInfoEntity,
}

impl OrderEntity {
    pub fn from_domain(order: &Order) -> Self {
        let info = &order.shipping_info;
        Self {
            id: order.id.to_string(),
            items: order.lines.iter().map(CartLineEntity::from_domain).collect(),
            subtotal: order.subtotal,
            shipping: order.shipping,
            total: order.total,
            status: order.status.to_string(),
            created_at: order.created_at,
            shipping_info: ShippingInfoEntity {
                full_name: info.full_name.clone(),
                email: info.email.clone(),
                address: info.address.clone(),
                city: info.city.clone(),
                postal_code: info.postal_code.clone(),
                country: info.country.clone(),
            },
        }
    }

    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let info = self.shipping_info;
        Ok(Order::from_repository(
            OrderId::new(self.id),
            lines_into_domain(self.items)?,
            self.subtotal,
            self.shipping,
            self.total,
            self.status
                .parse::<OrderStatus>()
                .unwrap_or(OrderStatus::Processing),
            self.created_at,
            ShippingInfo::from_repository(NewShippingInfoProps {
                full_name: info.full_name,
                email: info.email,
                address: info.address,
                city: info.city,
                postal_code: info.postal_code,
                country: info.country,
            }),
        ))
    }
}
