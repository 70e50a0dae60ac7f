//! Header augmentation as observed by the backend.

#![allow(clippy::unwrap_used)]

use httpmock::prelude::*;
use secrecy::SecretString;

use mobile_storefront::api;
use mobile_storefront::{ApiError, Domain, RegistryError};
use mobile_storefront_integration_tests::{cart_payload, clients_for, initialized, user_payload};

#[tokio::test]
async fn test_version_headers_sent_without_credential() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/cart")
                .header("app-version", "1.0.0")
                .header("app-platform", "mobile")
                .header("scope", "cart")
                .header_missing("authorization");
            then.status(200).json_body(cart_payload());
        })
        .await;

    let registry = initialized(&server, Domain::Cart);
    api::cart::fetch_cart(&registry).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_bearer_token_sent_after_authorize() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/customers/me")
                .header("scope", "auth")
                .header("authorization", "Bearer cust-token-1");
            then.status(200).json_body(user_payload());
        })
        .await;

    let mut registry = initialized(&server, Domain::Auth);
    registry
        .authorize(&SecretString::from("cust-token-1"))
        .unwrap();
    api::auth::fetch_profile(&registry).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_reauthorize_sends_only_latest_token() {
    let server = MockServer::start_async().await;
    let old_token = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/cart")
                .header("authorization", "Bearer old");
            then.status(200).json_body(cart_payload());
        })
        .await;
    let new_token = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/cart")
                .header("authorization", "Bearer new");
            then.status(200).json_body(cart_payload());
        })
        .await;

    let mut registry = initialized(&server, Domain::Cart);
    registry.authorize(&SecretString::from("old")).unwrap();
    registry.authorize(&SecretString::from("new")).unwrap();
    api::cart::fetch_cart(&registry).await.unwrap();

    assert_eq!(old_token.hits_async().await, 0);
    new_token.assert_async().await;
}

#[tokio::test]
async fn test_scope_header_per_domain() {
    let server = MockServer::start_async().await;
    let orders = server
        .mock_async(|when, then| {
            when.method(GET).path("/orders").header("scope", "orders");
            then.status(200)
                .json_body(serde_json::json!({ "items": [], "total_count": 0 }));
        })
        .await;
    let products = server
        .mock_async(|when, then| {
            when.method(GET).path("/products").header("scope", "products");
            then.status(200)
                .json_body(serde_json::json!({ "items": [], "total_count": 0 }));
        })
        .await;

    let mut clients = clients_for(&server);
    clients.initialize_all().unwrap();
    clients.authorize_all(&SecretString::from("shared")).unwrap();

    api::orders::fetch_orders(&clients.orders, 1, 20).await.unwrap();
    api::products::fetch_products(&clients.products, 1, 20)
        .await
        .unwrap();

    orders.assert_async().await;
    products.assert_async().await;
}

#[tokio::test]
async fn test_uninitialized_registry_sends_nothing() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.path("/cart");
            then.status(200).json_body(cart_payload());
        })
        .await;

    let clients = clients_for(&server);
    let err = api::cart::fetch_cart(&clients.cart).await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Registry(RegistryError::NotInitialized {
            domain: Domain::Cart
        })
    ));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_wrong_domain_registry_is_rejected() {
    let server = MockServer::start_async().await;
    let registry = initialized(&server, Domain::Products);

    let err = api::cart::fetch_cart_summary(&registry).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Registry(RegistryError::DomainMismatch {
            expected: Domain::Cart,
            actual: Domain::Products
        })
    ));
}
