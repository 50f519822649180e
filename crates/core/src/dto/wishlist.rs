//! Wishlist entities.

use serde::{Deserialize, Serialize};

use crate::dto::catalog::Product;
use crate::types::id::WishlistId;

/// The authenticated user's wishlist.
///
/// Unlike cart lines, wishlist items are full products.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    /// Wishlist ID.
    pub id: WishlistId,
    /// Saved products.
    pub items: Vec<Product>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wishlist_deserializes_backend_payload() {
        let json = serde_json::json!({
            "id": "5",
            "items": [
                {
                    "id": "7",
                    "name": "Neon Flamingo",
                    "price": 49.99,
                    "inStock": true,
                    "featured": true,
                    "new": false,
                    "reviews": 17
                }
            ]
        });

        let wishlist: Wishlist = serde_json::from_value(json).unwrap();
        assert_eq!(wishlist.id, WishlistId::new("5"));
        assert_eq!(wishlist.items.len(), 1);
        assert_eq!(wishlist.items[0].name, "Neon Flamingo");
    }
}
