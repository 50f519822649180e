//! Startup sequence: a persisted token is validated against the
//! backend, and the loading flag ends false whatever happens.

#![allow(clippy::unwrap_used)]

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use delight_integration_tests::{TestContext, cart_json, product_json, user_json, wishlist_json};

#[tokio::test]
async fn valid_token_adopts_server_cart_and_wishlist() {
    let ctx = TestContext::new().await;
    ctx.seed_token("tok-resumed");

    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .and(header("authorization", "Bearer tok-resumed"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(user_json("9", "shopper@example.com", "Sam")),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cart_json(&[("7", 10.0, 2)])))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/wishlist"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(wishlist_json(&[product_json("3", "Saved Lamp", 19.99)])),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let store = ctx.store();
    assert!(store.is_loading());

    store.init().await;

    assert!(!store.is_loading());
    assert!(store.is_authenticated());
    assert_eq!(store.user().unwrap().name, "Sam");
    assert_eq!(store.cart_count(), 2);
    assert_eq!(store.wishlist().len(), 1);
}

#[tokio::test]
async fn rejected_token_is_cleared_and_store_stays_guest() {
    let ctx = TestContext::new().await;
    ctx.seed_token("tok-expired");

    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Token expired"})),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    // No cart or wishlist fetch happens for a rejected token.
    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let store = ctx.store();
    store.init().await;

    assert!(!store.is_loading());
    assert!(!store.is_authenticated());
    assert!(!store.api().has_token());
    assert!(!ctx.has_persisted_token());
}

#[tokio::test]
async fn guest_startup_makes_no_requests() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let store = ctx.store();
    store.init().await;

    assert!(!store.is_loading());
    assert!(!store.is_authenticated());
    assert!(store.cart().is_empty());
}
