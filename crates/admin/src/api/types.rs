//! Request and response shapes specific to the admin surface.

use delight_core::{CategoryId, Price};
use serde::{Deserialize, Serialize};

// ============================================================================
// Dashboard
// ============================================================================

/// Aggregate counts and revenue shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_orders: i64,
    pub total_products: i64,
    pub total_revenue: Price,
    pub orders_today: i64,
    pub orders_this_week: i64,
    pub orders_this_month: i64,
    pub revenue_today: Price,
    pub revenue_this_week: Price,
    pub revenue_this_month: Price,
    pub pending_orders: i64,
    pub shipped_orders: i64,
    pub delivered_orders: i64,
}

// ============================================================================
// Analytics
// ============================================================================

/// Chart data for an N-day window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub daily_stats: Vec<DailyStats>,
    pub category_sales: Vec<CategorySales>,
    pub top_products: Vec<TopProduct>,
    pub order_status_breakdown: OrderStatusBreakdown,
}

/// Orders and revenue for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStats {
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    pub orders: i64,
    pub revenue: Price,
}

/// Sales attributed to one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,
    pub orders: i64,
    pub revenue: Price,
}

/// A best-selling product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub sold: i64,
}

/// Order counts by lifecycle status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusBreakdown {
    pub pending: i64,
    pub confirmed: i64,
    pub shipped: i64,
    pub delivered: i64,
    pub cancelled: i64,
}

// ============================================================================
// User Management
// ============================================================================

/// Body for `PUT /admin/users/{id}`. Only the fields present change.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
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
// Catalog CRUD
// ============================================================================

/// Body for `POST /products` and `PUT /products/{id}`.
///
/// The backend takes the full product shape on both create and update;
/// the id comes from the path, never the body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    pub in_stock: bool,
    pub featured: bool,
    /// Wire key is `new`, matching the product field of the same name.
    #[serde(rename = "new")]
    pub is_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

/// Body for `POST /categories` and `PUT /categories/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
