//! Request and response shapes specific to the storefront surface.
//!
//! Entities shared with the admin surface (products, carts, orders and so
//! on) live in `delight_core::dto`. Everything here is either a request
//! body the shopper surface sends or a response envelope only it reads.

use delight_core::{CategoryId, Price, ProductId, Role, UserId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Authentication
// ============================================================================

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/forgot-password`.
#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Body for `POST /auth/reset-password`.
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

/// Successful login or registration response.
///
/// Carries the bearer token plus a flattened snapshot of the signed-in
/// user, which the store uses to seed its session without a second
/// round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    /// Token scheme, always `Bearer`. The wire key is `type`.
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: UserId,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: Role,
}

// ============================================================================
// Profile
// ============================================================================

/// Body for `PUT /users/me`. Every field is optional; the backend applies
/// only the fields present in the payload.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Query parameters for `GET /products`.
///
/// Unset fields are omitted from the query string, so an empty filter
/// lists the whole catalog page by page.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Case-insensitive substring match on the product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Category display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    /// Wire key is `new`, matching the product field of the same name.
    #[serde(rename = "new", skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    /// Zero-based page index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

impl ProductFilter {
    /// Whether this filter narrows the catalog at all. Pagination alone
    /// does not count; unfiltered pages are safe to cache.
    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.category_id.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.in_stock.is_none()
            && self.featured.is_none()
            && self.is_new.is_none()
    }
}

// ============================================================================
// Cart
// ============================================================================

/// Body for `POST /cart/items`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: i64,
}

// ============================================================================
// Orders
// ============================================================================

/// Body for `POST /orders`. The cart on the server becomes the order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub shipping_address: String,
}

// ============================================================================
// Reviews
// ============================================================================

/// Body for `POST /reviews`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub product_id: ProductId,
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Body for `PUT /reviews/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

// ============================================================================
// Wishlist
// ============================================================================

/// Response for `GET /wishlist/check/{productId}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistCheck {
    pub in_wishlist: bool,
}

// ============================================================================
// Tests
// ============================================================================
