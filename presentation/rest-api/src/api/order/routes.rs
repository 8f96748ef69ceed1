use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::order::use_cases::advance_checkout::{
    AdvanceCheckoutParams, AdvanceCheckoutUseCase,
};
use business::domain::order::use_cases::get_all::GetAllOrdersUseCase;
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::order::value_objects::OrderId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{
    CheckoutStepRequest, CheckoutStepResponse, OrderResponse, PlaceOrderRequest,
};
use crate::api::tags::ApiTags;

pub struct OrderApi {
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    place_use_case: Arc<dyn PlaceOrderUseCase>,
    advance_checkout_use_case: Arc<dyn AdvanceCheckoutUseCase>,
}

impl OrderApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        place_use_case: Arc<dyn PlaceOrderUseCase>,
        advance_checkout_use_case: Arc<dyn AdvanceCheckoutUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            place_use_case,
            advance_checkout_use_case,
        }
    }
}

/// Orders and checkout API
#[OpenApi]
impl OrderApi {
    /// Order history
    ///
    /// Returns every placed order, newest first.
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all_orders(&self) -> GetAllOrdersResponse {
        match self.get_all_use_case.execute().await {
            Ok(orders) => {
                GetAllOrdersResponse::Ok(Json(orders.into_iter().map(|o| o.into()).collect()))
            }
            Err(err) => GetAllOrdersResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Place an order
    ///
    /// Turns the current cart into an order and empties the cart.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn place_order(&self, body: Json<PlaceOrderRequest>) -> PlaceOrderResponse {
        let params = PlaceOrderParams {
            shipping_info: body.0.shipping_info.into(),
        };

        match self.place_use_case.execute(params).await {
            Ok(order) => PlaceOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    409 => PlaceOrderResponse::Conflict(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an order
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_by_id(&self, id: Path<String>) -> GetOrderResponse {
        let params = GetOrderByIdParams {
            id: OrderId::new(id.0),
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(order) => GetOrderResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderResponse::NotFound(json),
                    _ => GetOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Move through the checkout wizard
    ///
    /// Going forward from the information step validates the shipping form.
    #[oai(path = "/checkout/steps", method = "post", tag = "ApiTags::Checkout")]
    async fn advance_checkout(&self, body: Json<CheckoutStepRequest>) -> CheckoutStepApiResponse {
        let request = body.0;
        let params = AdvanceCheckoutParams {
            step: request.step.into(),
            direction: request.direction.into(),
            shipping_info: request.shipping_info.into(),
        };

        match self.advance_checkout_use_case.execute(params).await {
            Ok(step) => CheckoutStepApiResponse::Ok(Json(CheckoutStepResponse { step: step.into() })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutStepApiResponse::BadRequest(json),
                    _ => CheckoutStepApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutStepApiResponse {
    #[oai(status = 200)]
    Ok(Json<CheckoutStepResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
