//! REST client implementation for the admin surface.
//!
//! Mirrors the storefront client's request plumbing but carries its
//! token in memory only and refuses to send without one; there is no
//! guest mode on this surface and nothing here is cached.

use std::sync::{Arc, RwLock};

use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use delight_core::{
    Category, CategoryId, Order, OrderId, OrderStatus, Page, Product, ProductId, Role, UploadKind,
    UploadResponse, User, UserId,
};

use crate::config::AdminConfig;

use super::types::{
    Analytics, CategoryInput, DashboardStats, ProductInput, UpdateUserRequest,
};
use super::AdminError;

/// Shape of the backend's error bodies (`{"message": "..."}`).
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

// =============================================================================
// AdminClient
// =============================================================================

/// Client for the admin REST API.
///
/// Cheap to clone; clones share the HTTP pool and the bearer token. The
/// token comes from configuration or from [`AdminClient::set_token`]
/// after an admin login on the storefront surface.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    http: reqwest::Client,
    /// Base URL including the API prefix, without a trailing slash.
    base_url: String,
    token: RwLock<Option<SecretString>>,
}

impl AdminClient {
    /// Create a new admin API client, seeded with the configured token
    /// if one is set.
    #[must_use]
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            inner: Arc::new(AdminClientInner {
                http: reqwest::Client::new(),
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
                token: RwLock::new(config.admin_token.clone()),
            }),
        }
    }

    /// Whether a bearer token is currently held.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.inner.token.read().is_ok_and(|t| t.is_some())
    }

    /// Replace the bearer token (in memory only).
    pub fn set_token(&self, token: SecretString) {
        if let Ok(mut slot) = self.inner.token.write() {
            *slot = Some(token);
        }
    }

    /// Drop the bearer token.
    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.inner.token.write() {
            *slot = None;
        }
    }

    // =========================================================================
    // Request Plumbing
    // =========================================================================

    fn builder(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, AdminError> {
        let token = self
            .inner
            .token
            .read()
            .ok()
            .and_then(|t| t.as_ref().map(|t| t.expose_secret().to_string()))
            .ok_or(AdminError::NoToken)?;

        Ok(self
            .inner
            .http
            .request(method, format!("{}{path}", self.inner.base_url))
            .bearer_auth(token))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, AdminError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::request_error(status, &body));
        }

        if body.trim().is_empty() {
            return serde_json::from_str("null").map_err(AdminError::from);
        }

        serde_json::from_str(&body).map_err(AdminError::from)
    }

    fn request_error(status: StatusCode, body: &str) -> AdminError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
        AdminError::Request { status, message }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AdminError> {
        self.execute(self.builder(Method::GET, path)?).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AdminError> {
        self.execute(self.builder(Method::DELETE, path)?).await
    }

    // =========================================================================
    // Dashboard & Analytics
    // =========================================================================

    /// Fetch the dashboard's aggregate statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is held or the request fails.
    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> Result<DashboardStats, AdminError> {
        self.get("/admin/dashboard").await
    }

    /// Fetch chart analytics for the last `days` days.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is held or the request fails.
    #[instrument(skip(self))]
    pub async fn analytics(&self, days: u32) -> Result<Analytics, AdminError> {
        self.execute(
            self.builder(Method::GET, "/admin/analytics")?
                .query(&[("days", days)]),
        )
        .await
    }

    // =========================================================================
    // User Management
    // =========================================================================

    /// List all user accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is held or the request fails.
    #[instrument(skip(self))]
    pub async fn list_users(&self, page: i64, size: i64) -> Result<Page<User>, AdminError> {
        self.execute(
            self.builder(Method::GET, "/admin/users")?
                .query(&[("page", page), ("size", size)]),
        )
        .await
    }

    /// Fetch a single user account.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the request fails.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: &UserId) -> Result<User, AdminError> {
        self.get(&format!("/admin/users/{id}")).await
    }

    /// Update a user account. Only the fields set in the request change.
    ///
    /// # Errors
    ///
    /// Returns an error if the update is rejected.
    #[instrument(skip(self, update), fields(user_id = %id))]
    pub async fn update_user(
        &self,
        id: &UserId,
        update: &UpdateUserRequest,
    ) -> Result<User, AdminError> {
        self.execute(
            self.builder(Method::PUT, &format!("/admin/users/{id}"))?
                .json(update),
        )
        .await
    }

    /// Delete a user account.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion is rejected.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: &UserId) -> Result<(), AdminError> {
        self.delete(&format!("/admin/users/{id}")).await
    }

    /// Assign a role to a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the assignment is rejected.
    #[instrument(skip(self), fields(user_id = %id, role = %role))]
    pub async fn set_user_role(&self, id: &UserId, role: Role) -> Result<User, AdminError> {
        self.execute(
            self.builder(Method::PATCH, &format!("/admin/users/{id}/role"))?
                .query(&[("role", role.to_string())]),
        )
        .await
    }

    /// Flip whether a user account may log in.
    ///
    /// # Errors
    ///
    /// Returns an error if the toggle is rejected.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn toggle_user_enabled(&self, id: &UserId) -> Result<User, AdminError> {
        self.execute(
            self.builder(Method::PATCH, &format!("/admin/users/{id}/toggle-enabled"))?,
        )
        .await
    }

    // =========================================================================
    // Order Management
    // =========================================================================

    /// List every order in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is held or the request fails.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, page: i64, size: i64) -> Result<Page<Order>, AdminError> {
        self.execute(
            self.builder(Method::GET, "/admin/orders")?
                .query(&[("page", page), ("size", size)]),
        )
        .await
    }

    /// Move an order to a new lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is rejected.
    #[instrument(skip(self), fields(order_id = %id, status = %status))]
    pub async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, AdminError> {
        self.execute(
            self.builder(Method::PATCH, &format!("/admin/orders/{id}/status"))?
                .query(&[("status", status.to_string())]),
        )
        .await
    }

    // =========================================================================
    // Catalog CRUD
    // =========================================================================

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is rejected.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create_product(&self, product: &ProductInput) -> Result<Product, AdminError> {
        self.execute(self.builder(Method::POST, "/products")?.json(product))
            .await
    }

    /// Replace a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the update is rejected.
    #[instrument(skip(self, product), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        product: &ProductInput,
    ) -> Result<Product, AdminError> {
        self.execute(
            self.builder(Method::PUT, &format!("/products/{id}"))?
                .json(product),
        )
        .await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion is rejected.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), AdminError> {
        self.delete(&format!("/products/{id}")).await
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the category is rejected.
    #[instrument(skip(self, category), fields(name = %category.name))]
    pub async fn create_category(&self, category: &CategoryInput) -> Result<Category, AdminError> {
        self.execute(self.builder(Method::POST, "/categories")?.json(category))
            .await
    }

    /// Replace a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the update is rejected.
    #[instrument(skip(self, category), fields(category_id = %id))]
    pub async fn update_category(
        &self,
        id: &CategoryId,
        category: &CategoryInput,
    ) -> Result<Category, AdminError> {
        self.execute(
            self.builder(Method::PUT, &format!("/categories/{id}"))?
                .json(category),
        )
        .await
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion is rejected.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn delete_category(&self, id: &CategoryId) -> Result<(), AdminError> {
        self.delete(&format!("/categories/{id}")).await
    }

    // =========================================================================
    // File Upload
    // =========================================================================

    /// Upload an image via multipart form encoding, returning its public
    /// URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload is rejected.
    #[instrument(skip(self, bytes), fields(kind = %kind, file_name = %file_name))]
    pub async fn upload_file(
        &self,
        kind: UploadKind,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, AdminError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        self.execute(
            self.builder(Method::POST, &format!("/files/upload/{kind}"))?
                .multipart(form),
        )
        .await
    }
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("base_url", &self.inner.base_url)
            .field("has_token", &self.has_token())
            .finish_non_exhaustive()
    }
}
