use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::order::checkout::{CheckoutDirection, CheckoutStep};
use business::domain::order::model::Order;
use business::domain::order::shipping::{NewShippingInfoProps, ShippingInfo};

use crate::api::cart::dto::CartLineResponse;
use crate::api::catalog::dto::money;

#[derive(Debug, Clone, Object)]
pub struct ShippingInfoRequest {
    #[oai(default)]
    pub full_name: String,
    #[oai(default)]
    pub email: String,
    #[oai(default)]
    pub address: String,
    #[oai(default)]
    pub city: String,
    #[oai(default)]
    pub postal_code: String,
    #[oai(default)]
    pub country: String,
}

impl From<ShippingInfoRequest> for NewShippingInfoProps {
    fn from(request: ShippingInfoRequest) -> Self {
        Self {
            full_name: request.full_name,
            email: request.email,
            address: request.address,
            city: request.city,
            postal_code: request.postal_code,
            country: request.country,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShippingInfoResponse {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl From<ShippingInfo> for ShippingInfoResponse {
    fn from(info: ShippingInfo) -> Self {
        Self {
            full_name: info.full_name,
            email: info.email,
            address: info.address,
            city: info.city,
            postal_code: info.postal_code,
            country: info.country,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PlaceOrderRequest {
    pub shipping_info: ShippingInfoRequest,
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    pub id: String,
    pub items: Vec<CartLineResponse>,
    pub item_count: u64,
    pub subtotal: f64,
    /// Always zero; shipping is free
    pub shipping: f64,
    pub total: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub shipping_info: ShippingInfoResponse,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        let item_count = order.item_count();
        Self {
            id: order.id.to_string(),
            item_count,
            items: order.lines.iter().map(CartLineResponse::from).collect(),
            subtotal: money(order.subtotal),
            shipping: money(order.shipping),
            total: money(order.total),
            status: order.status.to_string(),
            created_at: order.created_at,
            shipping_info: order.shipping_info.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
#[oai(rename_all = "lowercase")]
pub enum CheckoutStepDto {
    Information,
    Review,
    Payment,
}

impl From<CheckoutStep> for CheckoutStepDto {
    fn from(step: CheckoutStep) -> Self {
        match step {
            CheckoutStep::Information => CheckoutStepDto::Information,
            CheckoutStep::Review => CheckoutStepDto::Review,
            CheckoutStep::Payment => CheckoutStepDto::Payment,
        }
    }
}

impl From<CheckoutStepDto> for CheckoutStep {
    fn from(dto: CheckoutStepDto) -> Self {
        match dto {
            CheckoutStepDto::Information => CheckoutStep::Information,
            CheckoutStepDto::Review => CheckoutStep::Review,
            CheckoutStepDto::Payment => CheckoutStep::Payment,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
#[oai(rename_all = "lowercase")]
pub enum CheckoutDirectionDto {
    Next,
    Back,
}

impl From<CheckoutDirectionDto> for CheckoutDirection {
    fn from(dto: CheckoutDirectionDto) -> Self {
        match dto {
            CheckoutDirectionDto::Next => CheckoutDirection::Next,
            CheckoutDirectionDto::Back => CheckoutDirection::Back,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutStepRequest {
    pub step: CheckoutStepDto,
    pub direction: CheckoutDirectionDto,
    pub shipping_info: ShippingInfoRequest,
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutStepResponse {
    pub step: CheckoutStepDto,
}
