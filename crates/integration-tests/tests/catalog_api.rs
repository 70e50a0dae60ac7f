//! Orders and products listings against a mock backend.

#![allow(clippy::unwrap_used)]

use httpmock::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;

use mobile_storefront::api;
use mobile_storefront::Domain;
use mobile_storefront_core::OrderStatus;
use mobile_storefront_integration_tests::{cart_payload, initialized};

fn order(entity_id: u64, status: &str) -> serde_json::Value {
    json!({
        "entity_id": entity_id,
        "increment_id": format!("1000{entity_id}"),
        "customer_id": 1001,
        "status": status,
        "items": [],
        "subtotal": 10,
        "tax_amount": 0.8,
        "shipping_amount": 2.5,
        "grand_total": 13.3,
        "order_currency_code": "USD",
        "created_at": "2024-02-01T09:00:00Z",
        "updated_at": "2024-02-01T09:00:00Z"
    })
}

#[tokio::test]
async fn test_fetch_orders_sends_pagination() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/orders")
                .query_param("page", "2")
                .query_param("page_size", "5");
            then.status(200).json_body(json!({
                "items": [order(9, "processing"), order(8, "canceled")],
                "total_count": 12
            }));
        })
        .await;

    let registry = initialized(&server, Domain::Orders);
    let page = api::orders::fetch_orders(&registry, 2, 5).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.total_count, 12);
    let statuses: Vec<_> = page.items.iter().map(|o| o.status).collect();
    assert_eq!(statuses, vec![OrderStatus::Processing, OrderStatus::Cancelled]);
}

#[tokio::test]
async fn test_fetch_order() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/orders/9");
            then.status(200).json_body(order(9, "complete"));
        })
        .await;

    let registry = initialized(&server, Domain::Orders);
    let order = api::orders::fetch_order(&registry, "9").await.unwrap();

    assert_eq!(order.id, "9");
    assert_eq!(order.order_number, "10009");
    assert_eq!(order.status, OrderStatus::Completed);
    assert_eq!(order.total, Decimal::new(133, 1));
}

#[tokio::test]
async fn test_fetch_missing_order() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/orders/404");
            then.status(404)
                .json_body(json!({ "message": "The entity that was requested doesn't exist" }));
        })
        .await;

    let registry = initialized(&server, Domain::Orders);
    let err = api::orders::fetch_order(&registry, "404").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_order_id_stays_inside_orders_path() {
    let server = MockServer::start_async().await;
    // Nothing is mocked under /orders, so the server answers 404
    let cart = server
        .mock_async(|when, then| {
            when.path("/cart");
            then.status(200).json_body(cart_payload());
        })
        .await;

    let registry = initialized(&server, Domain::Orders);
    let err = api::orders::fetch_order(&registry, "../cart").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(cart.hits_async().await, 0);
}

#[tokio::test]
async fn test_dot_segment_product_id_is_rejected() {
    let server = MockServer::start_async().await;
    let listing = server
        .mock_async(|when, then| {
            when.path("/products");
            then.status(200)
                .json_body(json!({ "items": [], "total_count": 0 }));
        })
        .await;

    let registry = initialized(&server, Domain::Products);
    let err = api::products::fetch_product(&registry, "..").await.unwrap_err();

    assert!(matches!(err, mobile_storefront::ApiError::Validation(_)));
    assert_eq!(listing.hits_async().await, 0);
}

#[tokio::test]
async fn test_fetch_products_and_product() {
    let server = MockServer::start_async().await;
    let product = json!({
        "id": 501,
        "sku": "PC-100",
        "name": "Pineapple Chips",
        "price": 4.5,
        "special_price": 3.99,
        "image_url": "https://cdn.example.com/pc-100.png",
        "in_stock": true,
        "category_ids": [3]
    });
    let listing = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/products")
                .query_param("page", "1")
                .query_param("page_size", "20");
            then.status(200)
                .json_body(json!({ "items": [product.clone()], "total_count": 1 }));
        })
        .await;
    let single = server
        .mock_async(|when, then| {
            when.method(GET).path("/products/501");
            then.status(200).json_body(product.clone());
        })
        .await;

    let registry = initialized(&server, Domain::Products);

    let page = api::products::fetch_products(&registry, 1, api::DEFAULT_PAGE_SIZE)
        .await
        .unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items.first().unwrap().id, "501");

    let fetched = api::products::fetch_product(&registry, "501").await.unwrap();
    assert_eq!(fetched.promo_price, Some(Decimal::new(399, 2)));
    assert_eq!(fetched.category_ids, vec!["3"]);

    listing.assert_async().await;
    single.assert_async().await;
}
