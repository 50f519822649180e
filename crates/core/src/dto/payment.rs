//! Payment entities.

use serde::{Deserialize, Serialize};

use crate::types::id::{OrderId, PaymentIntentId};
use crate::types::price::Price;
use crate::types::status::PaymentStatus;

/// A payment intent for an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Order being paid. Arrives as a JSON number.
    pub order_id: OrderId,
    /// Processor-issued intent ID.
    pub payment_intent_id: PaymentIntentId,
    /// Amount to charge.
    pub amount: Price,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Payment lifecycle status.
    pub status: PaymentStatus,
    /// Client secret for completing the payment from a browser, when the
    /// intent was just created.
    pub client_secret: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_deserializes_numeric_order_id() {
        let json = serde_json::json!({
            "orderId": 21,
            "paymentIntentId": "pi_3MtwBwLkdIwHu7ix28a3tqPa",
            "amount": 99.98,
            "currency": "USD",
            "status": "PENDING",
            "clientSecret": "pi_3MtwBwLkdIwHu7ix28a3tqPa_secret_abc"
        });

        let payment: Payment = serde_json::from_value(json).unwrap();
        assert_eq!(payment.order_id, OrderId::new("21"));
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert!(payment.client_secret.is_some());
    }

    #[test]
    fn test_payment_status_lookup_payload() {
        let json = serde_json::json!({
            "orderId": 21,
            "paymentIntentId": "pi_3MtwBwLkdIwHu7ix28a3tqPa",
            "amount": 99.98,
            "currency": "USD",
            "status": "COMPLETED"
        });

        let payment: Payment = serde_json::from_value(json).unwrap();
        assert_eq!(payment.status, PaymentStatus::Completed);
        assert!(payment.client_secret.is_none());
    }
}
