//! Frontend Models
//!
//! Data structures matching the ordering service API.

use serde::{Deserialize, Serialize};

/// Catalog entry available for ordering (read-only on the client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

/// One in-progress selection: a menu item, a quantity, and optional customization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
    #[serde(default)]
    pub removed_ingredients: Vec<String>,
    pub special_request: Option<String>,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.item.price * self.quantity as f64
    }
}

/// Projection of a cart line sent with an order submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: u32,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub removed_ingredients: Vec<String>,
    pub special_request: Option<String>,
}

/// A placed order as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub lines: Vec<OrderLine>,
    pub total: f64,
    pub status: OrderStatus,
    pub placed_at: String,
}

/// Kitchen progression of an order. Unknown wire values are kept verbatim
/// so a newer backend never breaks rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Other(s) => s,
        }
    }

    /// Display label for status badges
    pub fn label(&self) -> String {
        match self {
            OrderStatus::Pending => "Pending".to_string(),
            OrderStatus::Preparing => "Preparing".to_string(),
            OrderStatus::Ready => "Ready".to_string(),
            OrderStatus::Delivered => "Delivered".to_string(),
            OrderStatus::Other(s) => s.clone(),
        }
    }

    /// Next stage in the kitchen flow, None once delivered or unknown
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Other(_) => None,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "preparing" => OrderStatus::Preparing,
            "ready" => OrderStatus::Ready,
            "delivered" => OrderStatus::Delivered,
            _ => OrderStatus::Other(s),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Account role gating chef-only views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Chef,
}

/// Authenticated account held for the browser session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Rating + comment attached to a delivered order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub order_id: u32,
    pub rating: u8,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_wire_values() {
        assert_eq!(OrderStatus::from("preparing".to_string()), OrderStatus::Preparing);
        assert_eq!(OrderStatus::from("Delivered".to_string()), OrderStatus::Delivered);
    }

    #[test]
    fn status_keeps_unknown_wire_values() {
        let status = OrderStatus::from("cancelled".to_string());
        assert_eq!(status, OrderStatus::Other("cancelled".to_string()));
        assert_eq!(status.as_str(), "cancelled");
        assert_eq!(status.next(), None);
    }

    #[test]
    fn status_advances_through_kitchen_flow() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::Preparing.next(), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::Ready.next(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.next(), None);
    }
}
