//! Order entities.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::id::{OrderId, OrderItemId, PaymentIntentId, ProductId, UserId};
use crate::types::price::Price;
use crate::types::status::{OrderStatus, PaymentStatus};

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID.
    pub id: OrderId,
    /// User who placed the order.
    pub user_id: UserId,
    /// Email of the user who placed the order.
    pub user_email: String,
    /// Ordered items.
    pub items: Vec<OrderItem>,
    /// Order total.
    pub total_amount: Price,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Shipping address supplied at checkout.
    pub shipping_address: String,
    /// Payment intent ID once payment has been initiated.
    pub payment_id: Option<PaymentIntentId>,
    /// Payment lifecycle status.
    pub payment_status: PaymentStatus,
    /// When the order was placed. The backend emits local timestamps
    /// without an offset.
    pub created_at: NaiveDateTime,
}

/// A line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Item ID.
    pub id: OrderItemId,
    /// Product that was ordered.
    pub product_id: ProductId,
    /// Product name at the time of ordering.
    pub product_name: String,
    /// Product image URL at the time of ordering.
    pub product_image: Option<String>,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at the time of ordering.
    pub price: Price,
}
