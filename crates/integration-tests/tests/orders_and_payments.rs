//! Checkout, order lifecycle, payments, and reviews over the wire.

#![allow(clippy::unwrap_used)]

use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use delight_core::{OrderId, OrderStatus, PaymentIntentId, PaymentStatus, ProductId};
use delight_integration_tests::{TestContext, cart_json, order_json, page_json, user_json, wishlist_json};
use delight_storefront::api::{ApiError, CreateReviewRequest};

#[tokio::test]
async fn placing_an_order_adopts_the_emptied_cart() {
    let ctx = TestContext::new().await;
    ctx.seed_token("tok-session");

    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(user_json("9", "shopper@example.com", "Sam")),
        )
        .mount(&ctx.server)
        .await;
    // Startup sees one item; the post-checkout re-fetch sees none.
    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cart_json(&[("7", 49.99, 1)])))
        .expect(1)
        .up_to_n_times(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/wishlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wishlist_json(&[])))
        .mount(&ctx.server)
        .await;

    let store = ctx.store();
    store.init().await;
    assert_eq!(store.cart_count(), 1);

    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(body_partial_json(serde_json::json!({
            "shippingAddress": "1 Glow Lane, Lumen City"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json("21", "PENDING", 49.99)))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cart_json(&[])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let order = store.place_order("1 Glow Lane, Lumen City").await.unwrap();

    assert_eq!(order.id, OrderId::new("21"));
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.status.is_cancellable());
    assert!(store.cart().is_empty());
}

#[tokio::test]
async fn order_history_is_paged() {
    let ctx = TestContext::new().await;
    ctx.seed_token("tok-session");

    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .and(query_param("page", "0"))
        .and(query_param("size", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(vec![order_json("21", "DELIVERED", 49.99)], 1)),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let orders = ctx.client().get_orders(0, 10).await.unwrap();
    assert_eq!(orders.total_elements, 1);
    assert_eq!(
        orders.content.first().unwrap().status,
        OrderStatus::Delivered
    );
}

#[tokio::test]
async fn cancelling_an_order_returns_its_new_status() {
    let ctx = TestContext::new().await;
    ctx.seed_token("tok-session");

    Mock::given(method("POST"))
        .and(path("/api/orders/21/cancel"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(order_json("21", "CANCELLED", 49.99)),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let order = ctx
        .client()
        .cancel_order(&OrderId::new("21"))
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);
    assert!(!order.status.is_cancellable());
}

#[tokio::test]
async fn payment_intent_then_confirmation() {
    let ctx = TestContext::new().await;
    ctx.seed_token("tok-session");

    Mock::given(method("POST"))
        .and(path("/api/payments/create-intent/21"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orderId": 21,
            "paymentIntentId": "pi_abc",
            "amount": 49.99,
            "currency": "usd",
            "status": "PENDING",
            "clientSecret": "pi_abc_secret"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/payments/confirm/pi_abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "orderId": 21,
            "paymentIntentId": "pi_abc",
            "amount": 49.99,
            "currency": "usd",
            "status": "COMPLETED",
            "clientSecret": null
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let client = ctx.client();

    let intent = client
        .create_payment_intent(&OrderId::new("21"))
        .await
        .unwrap();
    assert_eq!(intent.status, PaymentStatus::Pending);
    assert_eq!(intent.client_secret.as_deref(), Some("pi_abc_secret"));

    let confirmed = client
        .confirm_payment(&PaymentIntentId::new("pi_abc"))
        .await
        .unwrap();
    assert_eq!(confirmed.status, PaymentStatus::Completed);
    assert_eq!(confirmed.order_id, OrderId::new("21"));
}

#[tokio::test]
async fn posting_a_review_sends_the_rating_and_comment() {
    let ctx = TestContext::new().await;
    ctx.seed_token("tok-session");

    Mock::given(method("POST"))
        .and(path("/api/reviews"))
        .and(body_partial_json(serde_json::json!({
            "productId": "7",
            "rating": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "41",
            "productId": "7",
            "userId": "9",
            "userName": "Sam",
            "rating": 5,
            "comment": "Glows exactly as promised.",
            "createdAt": "2024-03-08T09:12:44"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let review = ctx
        .client()
        .create_review(&CreateReviewRequest {
            product_id: ProductId::new("7"),
            rating: 5,
            comment: Some("Glows exactly as promised.".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(review.rating, 5);
}

#[tokio::test]
async fn out_of_range_rating_never_reaches_the_backend() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client()
        .create_review(&CreateReviewRequest {
            product_id: ProductId::new("7"),
            rating: 6,
            comment: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}
