//! Product review entities.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::id::{ProductId, ReviewId, UserId};

/// A customer review of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review ID.
    pub id: ReviewId,
    /// Reviewed product.
    pub product_id: ProductId,
    /// Author of the review.
    pub user_id: UserId,
    /// Author display name.
    pub user_name: String,
    /// Star rating, 1 to 5.
    pub rating: i32,
    /// Free-form comment.
    pub comment: Option<String>,
    /// When the review was written.
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_review_deserializes_backend_payload() {
        let json = serde_json::json!({
            "id": "41",
            "productId": "7",
            "userId": "9",
            "userName": "Flamingo Fan",
            "rating": 5,
            "comment": "Glows exactly as promised.",
            "createdAt": "2024-03-08T09:12:44"
        });

        let review: Review = serde_json::from_value(json).unwrap();
        assert_eq!(review.id, ReviewId::new("41"));
        assert_eq!(review.rating, 5);
        assert_eq!(review.comment.as_deref(), Some("Glows exactly as promised."));
    }

    #[test]
    fn test_review_without_comment() {
        let json = serde_json::json!({
            "id": "42",
            "productId": "7",
            "userId": "10",
            "userName": "Quiet Customer",
            "rating": 3,
            "comment": null,
            "createdAt": "2024-03-08T10:00:00"
        });

        let review: Review = serde_json::from_value(json).unwrap();
        assert!(review.comment.is_none());
    }
}
