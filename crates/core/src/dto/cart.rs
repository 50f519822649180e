//! Server-side cart entities.

use serde::{Deserialize, Serialize};

use crate::types::id::{CartId, CartLineId, ProductId};
use crate::types::price::Price;

/// The authenticated user's server-side cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Cart ID.
    pub id: CartId,
    /// Lines in the cart.
    pub items: Vec<CartLine>,
    /// Sum of line prices times quantities.
    pub total_price: Price,
    /// Sum of line quantities.
    pub total_items: i64,
}

/// A line in the server-side cart.
///
/// Carries a denormalized snapshot of the product so the cart renders
/// without extra lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Line ID.
    pub id: CartLineId,
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name at the time it was added.
    pub name: String,
    /// Product image URL.
    pub image: Option<String>,
    /// Category name, if the product has one.
    pub category: Option<String>,
    /// Unit price.
    pub price: Price,
    /// Quantity of this product in the cart.
    pub quantity: i64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_deserializes_backend_payload() {
        let json = serde_json::json!({
            "id": "4",
            "items": [
                {
                    "id": "11",
                    "productId": "7",
                    "name": "Neon Flamingo",
                    "image": "/uploads/products/flamingo.jpg",
                    "category": "Signs",
                    "price": 49.99,
                    "quantity": 2
                },
                {
                    "id": "12",
                    "productId": "8",
                    "name": "Bare Bulb",
                    "image": null,
                    "category": null,
                    "price": 5,
                    "quantity": 1
                }
            ],
            "totalPrice": 104.98,
            "totalItems": 3
        });

        let cart: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(cart.id, CartId::new("4"));
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total_items, 3);
        assert_eq!(cart.total_price.display(), "$104.98");

        let first = &cart.items[0];
        assert_eq!(first.product_id, ProductId::new("7"));
        assert_eq!(first.quantity, 2);
        assert!(cart.items[1].category.is_none());
    }
}
