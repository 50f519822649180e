//! REST client implementation for the storefront surface.
//!
//! Every call funnels through [`ApiClient::execute`], which attaches the
//! bearer token, maps non-2xx statuses to [`ApiError::Request`] with the
//! server's `message` when one decodes, and treats `204`/empty bodies as
//! JSON `null`. Catalog reads are cached with `moka` (5-minute TTL).

use std::sync::{Arc, RwLock};
use std::time::Duration;

use moka::future::Cache;
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use delight_core::{
    Cart, Category, CategoryId, MessageResponse, Order, OrderId, Page, Payment, PaymentIntentId,
    Product, ProductId, Review, ReviewId, UploadKind, UploadResponse, User, Wishlist,
};

use crate::config::StorefrontConfig;

use super::cache::CacheValue;
use super::token::TokenStore;
use super::types::{
    AddToCartRequest, AuthResponse, CreateOrderRequest, CreateReviewRequest,
    ForgotPasswordRequest, LoginRequest, ProductFilter, RegisterRequest, ResetPasswordRequest,
    UpdateProfileRequest, UpdateReviewRequest, WishlistCheck,
};
use super::ApiError;

/// Shape of the backend's error bodies (`{"message": "..."}`).
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

// =============================================================================
// ApiClient
// =============================================================================

/// Client for the storefront REST API.
///
/// Cheap to clone; clones share the HTTP pool, the bearer token, and the
/// catalog cache. The token is read from the token file at construction,
/// so a fresh client over the same file resumes the persisted session.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    /// Base URL including the API prefix, without a trailing slash.
    base_url: String,
    token: RwLock<Option<SecretString>>,
    token_store: TokenStore,
    cache: Cache<String, CacheValue>,
}

impl ApiClient {
    /// Create a new storefront API client.
    ///
    /// Loads any persisted bearer token from the configured token file. An
    /// unreadable token file is logged and treated as no session.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        let token_store = TokenStore::new(config.token_path.clone());
        let token = match token_store.load() {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Could not read persisted token; starting unauthenticated");
                None
            }
        };

        Self {
            inner: Arc::new(ApiClientInner {
                http: reqwest::Client::new(),
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
                token: RwLock::new(token),
                token_store,
                cache,
            }),
        }
    }

    // =========================================================================
    // Token Management
    // =========================================================================

    /// Whether a bearer token is currently held.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.inner.token.read().is_ok_and(|t| t.is_some())
    }

    /// Store a bearer token, persisting it to the token file before it
    /// takes effect in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the token file cannot be written.
    pub fn set_token(&self, token: SecretString) -> Result<(), ApiError> {
        self.inner.token_store.save(&token)?;
        if let Ok(mut slot) = self.inner.token.write() {
            *slot = Some(token);
        }
        Ok(())
    }

    /// Drop the bearer token and delete the token file.
    ///
    /// # Errors
    ///
    /// Returns an error if the token file cannot be removed.
    pub fn clear_token(&self) -> Result<(), ApiError> {
        self.inner.token_store.clear()?;
        if let Ok(mut slot) = self.inner.token.write() {
            *slot = None;
        }
        Ok(())
    }

    fn bearer(&self) -> Option<String> {
        self.inner
            .token
            .read()
            .ok()
            .and_then(|t| t.as_ref().map(|t| t.expose_secret().to_string()))
    }

    // =========================================================================
    // Request Plumbing
    // =========================================================================

    fn builder(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .inner
            .http
            .request(method, format!("{}{path}", self.inner.base_url));
        if let Some(token) = self.bearer() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send a prepared request and decode the response.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::request_error(status, &body));
        }

        // 204 No Content and empty bodies decode as JSON null, so unit
        // and Option targets parse without a special case at each call.
        if body.trim().is_empty() {
            return serde_json::from_str("null").map_err(ApiError::from);
        }

        serde_json::from_str(&body).map_err(ApiError::from)
    }

    fn request_error(status: StatusCode, body: &str) -> ApiError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
        ApiError::Request { status, message }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.builder(Method::GET, path)).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(self.builder(Method::POST, path).json(body))
            .await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.builder(Method::POST, path)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.builder(Method::DELETE, path)).await
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Log in with email and password.
    ///
    /// On success the returned bearer token is persisted and used for
    /// subsequent requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the token
    /// cannot be persisted.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth: AuthResponse = self.post("/auth/login", &body).await?;
        self.set_token(SecretString::from(auth.token.clone()))?;
        Ok(auth)
    }

    /// Register a new account.
    ///
    /// On success the returned bearer token is persisted, logging the new
    /// account in.
    ///
    /// # Errors
    ///
    /// Returns an error if registration is rejected or the token cannot
    /// be persisted.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth: AuthResponse = self.post("/auth/register", &body).await?;
        self.set_token(SecretString::from(auth.token.clone()))?;
        Ok(auth)
    }

    /// Request a password reset email.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(email = %email))]
    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let body = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.post("/auth/forgot-password", &body).await
    }

    /// Complete a password reset with an emailed token.
    ///
    /// # Errors
    ///
    /// Returns an error if the reset token is rejected.
    #[instrument(skip(self, token, password))]
    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let body = ResetPasswordRequest {
            token: token.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/reset-password", &body).await
    }

    /// Discard the session token. No server call is made; the backend's
    /// tokens are stateless.
    ///
    /// # Errors
    ///
    /// Returns an error if the token file cannot be removed.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.clear_token()
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Fetch the authenticated user's account.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or rejected.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get("/users/me").await
    }

    /// Update the authenticated user's profile. Only the fields set in
    /// the request change.
    ///
    /// # Errors
    ///
    /// Returns an error if the update is rejected.
    #[instrument(skip(self, update))]
    pub async fn update_profile(&self, update: &UpdateProfileRequest) -> Result<User, ApiError> {
        self.execute(self.builder(Method::PUT, "/users/me").json(update))
            .await
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// List products, optionally filtered and paginated.
    ///
    /// Unfiltered pages are cached; any search or filter term bypasses
    /// the cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, filter))]
    pub async fn get_products(&self, filter: &ProductFilter) -> Result<Page<Product>, ApiError> {
        let cache_key = format!(
            "products:{}:{}",
            filter.page.unwrap_or(0),
            filter.size.map_or_else(String::new, |s| s.to_string())
        );

        if filter.is_unfiltered()
            && let Some(CacheValue::Products(page)) = self.inner.cache.get(&cache_key).await
        {
            debug!("Cache hit for products");
            return Ok(page);
        }

        let page: Page<Product> = self
            .execute(self.builder(Method::GET, "/products").query(filter))
            .await?;

        if filter.is_unfiltered() {
            self.inner
                .cache
                .insert(cache_key, CacheValue::Products(page.clone()))
                .await;
        }

        Ok(page)
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let cache_key = format!("product:{id}");

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let product: Product = self.get(&format!("/products/{id}")).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// List the featured products shown on the home page.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_featured_products(&self) -> Result<Vec<Product>, ApiError> {
        self.cached_product_list("products:featured", "/products/featured")
            .await
    }

    /// List new-arrival products.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_new_products(&self) -> Result<Vec<Product>, ApiError> {
        self.cached_product_list("products:new", "/products/new")
            .await
    }

    async fn cached_product_list(
        &self,
        cache_key: &str,
        path: &str,
    ) -> Result<Vec<Product>, ApiError> {
        if let Some(CacheValue::ProductList(products)) = self.inner.cache.get(cache_key).await {
            debug!("Cache hit for product list");
            return Ok(products);
        }

        let products: Vec<Product> = self.get(path).await?;

        self.inner
            .cache
            .insert(
                cache_key.to_string(),
                CacheValue::ProductList(products.clone()),
            )
            .await;

        Ok(products)
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        let cache_key = "categories";

        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get(cache_key).await {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let categories: Vec<Category> = self.get("/categories").await?;

        self.inner
            .cache
            .insert(
                cache_key.to_string(),
                CacheValue::Categories(categories.clone()),
            )
            .await;

        Ok(categories)
    }

    /// Fetch a single category.
    ///
    /// # Errors
    ///
    /// Returns an error if the category does not exist or the request fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn get_category(&self, id: &CategoryId) -> Result<Category, ApiError> {
        let cache_key = format!("category:{id}");

        if let Some(CacheValue::Category(category)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for category");
            return Ok(*category);
        }

        let category: Category = self.get(&format!("/categories/{id}")).await?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Category(Box::new(category.clone())))
            .await;

        Ok(category)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Fetch the authenticated user's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_cart(&self) -> Result<Cart, ApiError> {
        self.get("/cart").await
    }

    /// Add a product to the cart, returning the updated cart.
    ///
    /// Adding a product already in the cart increases its quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(product_id = %product_id, quantity))]
    pub async fn add_to_cart(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<Cart, ApiError> {
        let body = AddToCartRequest {
            product_id: product_id.clone(),
            quantity,
        };
        self.post("/cart/items", &body).await
    }

    /// Set the quantity of a product in the cart, returning the updated
    /// cart. The backend removes the line when the quantity reaches zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(product_id = %product_id, quantity))]
    pub async fn update_cart_item(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<Cart, ApiError> {
        self.execute(
            self.builder(Method::PUT, &format!("/cart/items/{product_id}"))
                .query(&[("quantity", quantity)]),
        )
        .await
    }

    /// Remove a product from the cart, returning the updated cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_from_cart(&self, product_id: &ProductId) -> Result<Cart, ApiError> {
        self.delete(&format!("/cart/items/{product_id}")).await
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<(), ApiError> {
        self.delete("/cart").await
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Fetch the authenticated user's wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_wishlist(&self) -> Result<Wishlist, ApiError> {
        self.get("/wishlist").await
    }

    /// Add a product to the wishlist, returning the updated wishlist.
    /// Adding a product already present is a no-op on the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_to_wishlist(&self, product_id: &ProductId) -> Result<Wishlist, ApiError> {
        self.post_empty(&format!("/wishlist/items/{product_id}"))
            .await
    }

    /// Remove a product from the wishlist, returning the updated wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn remove_from_wishlist(&self, product_id: &ProductId) -> Result<Wishlist, ApiError> {
        self.delete(&format!("/wishlist/items/{product_id}")).await
    }

    /// Check if a product is on the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn check_wishlist(&self, product_id: &ProductId) -> Result<WishlistCheck, ApiError> {
        self.get(&format!("/wishlist/check/{product_id}")).await
    }

    /// Empty the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn clear_wishlist(&self) -> Result<(), ApiError> {
        self.delete("/wishlist").await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// List the authenticated user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_orders(&self, page: i64, size: i64) -> Result<Page<Order>, ApiError> {
        self.execute(
            self.builder(Method::GET, "/orders")
                .query(&[("page", page), ("size", size)]),
        )
        .await
    }

    /// Fetch a single order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist or belongs to another
    /// user.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        self.get(&format!("/orders/{id}")).await
    }

    /// Place an order from the server-side cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is empty or the request fails.
    #[instrument(skip(self, shipping_address))]
    pub async fn create_order(&self, shipping_address: &str) -> Result<Order, ApiError> {
        let body = CreateOrderRequest {
            shipping_address: shipping_address.to_string(),
        };
        self.post("/orders", &body).await
    }

    /// Cancel an order. The backend only allows this while the order is
    /// still `PENDING`.
    ///
    /// # Errors
    ///
    /// Returns an error if the order cannot be cancelled.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn cancel_order(&self, id: &OrderId) -> Result<Order, ApiError> {
        self.post_empty(&format!("/orders/{id}/cancel")).await
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    /// List reviews for a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_product_reviews(
        &self,
        product_id: &ProductId,
        page: i64,
        size: i64,
    ) -> Result<Page<Review>, ApiError> {
        self.execute(
            self.builder(Method::GET, &format!("/reviews/product/{product_id}"))
                .query(&[("page", page), ("size", size)]),
        )
        .await
    }

    /// Post a review. The rating must be between 1 and 5; out-of-range
    /// ratings are rejected before any request is made.
    ///
    /// # Errors
    ///
    /// Returns an error if the rating is out of range or the request fails.
    #[instrument(skip(self, review), fields(product_id = %review.product_id, rating = review.rating))]
    pub async fn create_review(&self, review: &CreateReviewRequest) -> Result<Review, ApiError> {
        Self::check_rating(review.rating)?;
        self.post("/reviews", review).await
    }

    /// Update one of the caller's reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the rating is out of range or the request fails.
    #[instrument(skip(self, update), fields(review_id = %id, rating = update.rating))]
    pub async fn update_review(
        &self,
        id: &ReviewId,
        update: &UpdateReviewRequest,
    ) -> Result<Review, ApiError> {
        Self::check_rating(update.rating)?;
        self.execute(
            self.builder(Method::PUT, &format!("/reviews/{id}"))
                .json(update),
        )
        .await
    }

    /// Delete one of the caller's reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(review_id = %id))]
    pub async fn delete_review(&self, id: &ReviewId) -> Result<(), ApiError> {
        self.delete(&format!("/reviews/{id}")).await
    }

    fn check_rating(rating: i32) -> Result<(), ApiError> {
        if (1..=5).contains(&rating) {
            Ok(())
        } else {
            Err(ApiError::Validation(format!(
                "rating must be between 1 and 5, got {rating}"
            )))
        }
    }

    // =========================================================================
    // Payments
    // =========================================================================

    /// Create a payment intent for an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not payable.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn create_payment_intent(&self, order_id: &OrderId) -> Result<Payment, ApiError> {
        self.post_empty(&format!("/payments/create-intent/{order_id}"))
            .await
    }

    /// Confirm a payment intent.
    ///
    /// # Errors
    ///
    /// Returns an error if the intent cannot be confirmed.
    #[instrument(skip(self), fields(payment_intent_id = %intent_id))]
    pub async fn confirm_payment(&self, intent_id: &PaymentIntentId) -> Result<Payment, ApiError> {
        self.post_empty(&format!("/payments/confirm/{intent_id}"))
            .await
    }

    /// Look up the status of a payment intent.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(payment_intent_id = %intent_id))]
    pub async fn get_payment_status(
        &self,
        intent_id: &PaymentIntentId,
    ) -> Result<Payment, ApiError> {
        self.get(&format!("/payments/status/{intent_id}")).await
    }

    // =========================================================================
    // File Upload
    // =========================================================================

    /// Upload a file via multipart form encoding, returning its public
    /// URL. The shopper surface only uses the `avatar` kind.
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
    ) -> Result<UploadResponse, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        self.execute(
            self.builder(Method::POST, &format!("/files/upload/{kind}"))
                .multipart(form),
        )
        .await
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    /// Invalidate a cached product.
    pub async fn invalidate_product(&self, id: &ProductId) {
        self.inner.cache.invalidate(&format!("product:{id}")).await;
    }

    /// Invalidate all cached catalog data.
    pub async fn invalidate_catalog(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("authenticated", &self.has_token())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_prefers_server_message() {
        let err = ApiClient::request_error(
            StatusCode::UNAUTHORIZED,
            r#"{"message": "Invalid credentials"}"#,
        );
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_request_error_generic_when_body_opaque() {
        let err = ApiClient::request_error(StatusCode::BAD_GATEWAY, "<html>nope</html>");
        assert_eq!(err.to_string(), "HTTP error! status: 502");
    }

    #[test]
    fn test_request_error_generic_when_message_missing() {
        let err = ApiClient::request_error(StatusCode::NOT_FOUND, r#"{"error": "Not Found"}"#);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn test_rating_bounds() {
        assert!(ApiClient::check_rating(1).is_ok());
        assert!(ApiClient::check_rating(5).is_ok());
        assert!(matches!(
            ApiClient::check_rating(0),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            ApiClient::check_rating(6),
            Err(ApiError::Validation(_))
        ));
    }
}
