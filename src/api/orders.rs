//! Order Endpoints
//!
//! Submission, history, detail, and the chef-side status flow.
//! All bearer-token authenticated.

use serde::{Deserialize, Serialize};

use super::{client, send_json, url, ApiError};
use crate::models::{Order, OrderLine, OrderStatus};

#[derive(Serialize)]
struct PlaceOrderArgs<'a> {
    lines: &'a [OrderLine],
    total: f64,
}

#[derive(Serialize)]
struct StatusArgs<'a> {
    status: &'a str,
}

/// Acknowledgement for a placed order
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderResponse {
    pub success: bool,
    pub order_id: u32,
    #[serde(default)]
    pub message: String,
}

pub async fn place_order(
    token: &str,
    lines: &[OrderLine],
    total: f64,
) -> Result<PlaceOrderResponse, ApiError> {
    let args = PlaceOrderArgs { lines, total };
    send_json(client().post(url("/orders")).bearer_auth(token).json(&args)).await
}

/// The caller's past orders, newest first.
pub async fn order_history(token: &str) -> Result<Vec<Order>, ApiError> {
    send_json(client().get(url("/orders")).bearer_auth(token)).await
}

pub async fn order_detail(token: &str, id: u32) -> Result<Order, ApiError> {
    send_json(client().get(url(&format!("/orders/{id}"))).bearer_auth(token)).await
}

/// Orders not yet delivered, for the chef dashboard.
pub async fn open_orders(token: &str) -> Result<Vec<Order>, ApiError> {
    send_json(client().get(url("/chef/orders")).bearer_auth(token)).await
}

pub async fn set_order_status(
    token: &str,
    id: u32,
    status: &OrderStatus,
) -> Result<Order, ApiError> {
    let args = StatusArgs {
        status: status.as_str(),
    };
    send_json(
        client()
            .put(url(&format!("/chef/orders/{id}/status")))
            .bearer_auth(token)
            .json(&args),
    )
    .await
}
