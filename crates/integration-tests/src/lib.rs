//! Shared harness for the end-to-end client tests.
//!
//! Every test gets its own [`wiremock::MockServer`] and a throwaway
//! token file, so no session state or mock expectations leak between
//! tests. The fixture builders produce the exact JSON the backend
//! emits, camelCase keys and all.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Test support: panicking on a broken fixture is the point.
#![allow(clippy::missing_panics_doc)]

use std::path::PathBuf;

use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::MockServer;

use delight_admin::api::AdminClient;
use delight_admin::config::AdminConfig;
use delight_storefront::api::{ApiClient, TokenStore};
use delight_storefront::config::StorefrontConfig;
use delight_storefront::store::Store;

/// One mock backend plus a private token file.
pub struct TestContext {
    /// The mock backend. Mount expectations on it with paths under `/api`.
    pub server: MockServer,
    dir: tempfile::TempDir,
}

impl TestContext {
    /// Start a fresh mock backend with an empty token directory.
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path of the token file clients in this context persist to.
    #[must_use]
    pub fn token_path(&self) -> PathBuf {
        self.dir.path().join("token.json")
    }

    fn storefront_config(&self) -> StorefrontConfig {
        StorefrontConfig {
            base_url: format!("{}/api", self.server.uri())
                .parse()
                .expect("mock server URI"),
            token_path: self.token_path(),
        }
    }

    /// A storefront client over this context's backend and token file.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.storefront_config())
    }

    /// A store over a fresh storefront client.
    #[must_use]
    pub fn store(&self) -> Store {
        Store::new(self.client())
    }

    /// An admin client holding the given bearer token.
    #[must_use]
    pub fn admin_client(&self, token: &str) -> AdminClient {
        AdminClient::new(&AdminConfig {
            base_url: format!("{}/api", self.server.uri())
                .parse()
                .expect("mock server URI"),
            admin_token: Some(SecretString::from(token.to_string())),
        })
    }

    /// An admin client with no token at all.
    #[must_use]
    pub fn admin_client_without_token(&self) -> AdminClient {
        AdminClient::new(&AdminConfig {
            base_url: format!("{}/api", self.server.uri())
                .parse()
                .expect("mock server URI"),
            admin_token: None,
        })
    }

    /// Write a token to the token file, as a previous session would have.
    pub fn seed_token(&self, token: &str) {
        TokenStore::new(self.token_path())
            .save(&SecretString::from(token.to_string()))
            .expect("seed token file");
    }

    /// Whether the token file currently exists on disk.
    #[must_use]
    pub fn has_persisted_token(&self) -> bool {
        self.token_path().exists()
    }
}

// =============================================================================
// JSON Fixtures
// =============================================================================

/// A catalog product with the given id, name, and price.
#[must_use]
pub fn product_json(id: &str, name: &str, price: f64) -> Value {
    json!({
        "id": id,
        "name": name,
        "price": price,
        "inStock": true,
        "featured": false,
        "new": false,
        "reviews": 0
    })
}

/// A server cart built from `(product id, unit price, quantity)` lines.
#[must_use]
pub fn cart_json(lines: &[(&str, f64, i64)]) -> Value {
    let items: Vec<Value> = lines
        .iter()
        .enumerate()
        .map(|(index, (product_id, price, quantity))| {
            json!({
                "id": (index + 1).to_string(),
                "productId": product_id,
                "name": format!("Product {product_id}"),
                "image": null,
                "category": null,
                "price": price,
                "quantity": quantity
            })
        })
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let total_price: f64 = lines.iter().map(|(_, p, q)| p * *q as f64).sum();
    let total_items: i64 = lines.iter().map(|(_, _, q)| q).sum();

    json!({
        "id": "1",
        "items": items,
        "totalPrice": total_price,
        "totalItems": total_items
    })
}

/// A server wishlist holding the given products.
#[must_use]
pub fn wishlist_json(products: &[Value]) -> Value {
    json!({
        "id": "1",
        "items": products
    })
}

/// A user account.
#[must_use]
pub fn user_json(id: &str, email: &str, name: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "name": name,
        "phone": null,
        "address": null,
        "avatar": null,
        "role": "CUSTOMER",
        "enabled": true,
        "createdAt": "2024-03-01T12:00:00"
    })
}

/// A successful login or registration response.
#[must_use]
pub fn auth_json(token: &str, id: &str, email: &str, name: &str) -> Value {
    json!({
        "token": token,
        "type": "Bearer",
        "id": id,
        "email": email,
        "name": name,
        "role": "CUSTOMER"
    })
}

/// A spring-style page wrapping the given content.
#[must_use]
pub fn page_json(content: Vec<Value>, total_elements: i64) -> Value {
    json!({
        "content": content,
        "totalElements": total_elements,
        "totalPages": 1,
        "size": 10,
        "number": 0
    })
}

/// An order in the given status.
#[must_use]
pub fn order_json(id: &str, status: &str, total: f64) -> Value {
    json!({
        "id": id,
        "userId": "9",
        "userEmail": "shopper@example.com",
        "items": [
            {
                "id": "31",
                "productId": "7",
                "productName": "Neon Flamingo",
                "productImage": null,
                "quantity": 1,
                "price": total
            }
        ],
        "totalAmount": total,
        "status": status,
        "shippingAddress": "1 Glow Lane, Lumen City",
        "paymentId": null,
        "paymentStatus": "PENDING",
        "createdAt": "2024-03-08T09:12:44"
    })
}
