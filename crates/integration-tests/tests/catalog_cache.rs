//! Catalog caching: unfiltered reads are served from the in-process
//! cache, filtered reads bypass it, and invalidation forces a re-fetch.

#![allow(clippy::unwrap_used)]

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use delight_core::ProductId;
use delight_integration_tests::{TestContext, page_json, product_json};
use delight_storefront::api::ProductFilter;

#[tokio::test]
async fn unfiltered_product_list_is_cached() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(vec![product_json("7", "Neon Flamingo", 49.99)], 1)),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let client = ctx.client();
    let filter = ProductFilter::default();

    let first = client.get_products(&filter).await.unwrap();
    let second = client.get_products(&filter).await.unwrap();

    assert_eq!(first.total_elements, 1);
    assert_eq!(second.total_elements, 1);
}

#[tokio::test]
async fn filtered_product_list_bypasses_the_cache() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("name", "flamingo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_json(vec![product_json("7", "Neon Flamingo", 49.99)], 1)),
        )
        .expect(2)
        .mount(&ctx.server)
        .await;

    let client = ctx.client();
    let filter = ProductFilter {
        name: Some("flamingo".to_string()),
        ..ProductFilter::default()
    };

    client.get_products(&filter).await.unwrap();
    client.get_products(&filter).await.unwrap();
}

#[tokio::test]
async fn single_product_is_cached_until_invalidated() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/api/products/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(product_json("7", "Neon Flamingo", 49.99)),
        )
        .expect(2)
        .mount(&ctx.server)
        .await;

    let client = ctx.client();
    let id = ProductId::new("7");

    // Two reads, one fetch.
    client.get_product(&id).await.unwrap();
    client.get_product(&id).await.unwrap();

    // Invalidation forces the second fetch.
    client.invalidate_product(&id).await;
    client.get_product(&id).await.unwrap();
}

#[tokio::test]
async fn catalog_invalidation_drops_every_cached_read() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "1", "name": "Signs", "count": 12}
        ])))
        .expect(2)
        .mount(&ctx.server)
        .await;

    let client = ctx.client();

    client.get_categories().await.unwrap();
    client.get_categories().await.unwrap();

    client.invalidate_catalog().await;
    let categories = client.get_categories().await.unwrap();
    assert_eq!(categories.first().unwrap().name, "Signs");
}

#[tokio::test]
async fn featured_list_is_cached() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path("/api/products/featured"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([product_json("7", "Neon Flamingo", 49.99)])),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let client = ctx.client();
    let first = client.get_featured_products().await.unwrap();
    let second = client.get_featured_products().await.unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}
