//! Auth domain API: login, profile validation and transformation.

#![allow(clippy::unwrap_used)]

use httpmock::prelude::*;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use mobile_storefront::api;
use mobile_storefront::{ApiError, Domain, RegistryState};
use mobile_storefront_core::Gender;
use mobile_storefront_integration_tests::{clients_for, initialized, user_payload};

#[tokio::test]
async fn test_fetch_profile() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/customers/me");
            then.status(200).json_body(user_payload());
        })
        .await;

    let registry = initialized(&server, Domain::Auth);
    let profile = api::auth::fetch_profile(&registry).await.unwrap();

    assert_eq!(profile.id, "1001");
    assert_eq!(profile.email, "maria@example.com");
    assert_eq!(profile.full_name(), "Maria Costa");
    assert_eq!(profile.gender, Gender::Male);
    assert!(profile.is_fully_verified());
    assert!(profile.address.is_none());
}

#[tokio::test]
async fn test_fetch_profile_with_string_gender_code() {
    let server = MockServer::start_async().await;
    let mut payload = user_payload();
    payload["gender"] = json!("1");
    server
        .mock_async(|when, then| {
            when.method(GET).path("/customers/me");
            then.status(200).json_body(payload);
        })
        .await;

    let registry = initialized(&server, Domain::Auth);
    let profile = api::auth::fetch_profile(&registry).await.unwrap();

    assert_eq!(profile.gender, Gender::Other);
    assert_eq!(profile.email, "maria@example.com");
}

#[tokio::test]
async fn test_fetch_profile_reports_first_missing_field() {
    let server = MockServer::start_async().await;
    let mut payload = user_payload();
    for field in ["email", "last_name", "created_at"] {
        payload.as_object_mut().unwrap().remove(field);
    }
    server
        .mock_async(|when, then| {
            when.method(GET).path("/customers/me");
            then.status(200).json_body(payload);
        })
        .await;

    let registry = initialized(&server, Domain::Auth);
    let err = api::auth::fetch_profile(&registry).await.unwrap_err();

    match err {
        ApiError::Validation(e) => assert_eq!(e.field(), Some("email")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_profile_rejects_non_boolean_flag() {
    let server = MockServer::start_async().await;
    let mut payload = user_payload();
    payload["is_phone_verified"] = json!("yes");
    server
        .mock_async(|when, then| {
            when.method(GET).path("/customers/me");
            then.status(200).json_body(payload);
        })
        .await;

    let registry = initialized(&server, Domain::Auth);
    let err = api::auth::fetch_profile(&registry).await.unwrap_err();

    assert!(matches!(err, ApiError::Validation(ref e) if e.field() == Some("is_phone_verified")));
}

#[tokio::test]
async fn test_login_then_authorize_all() {
    let server = MockServer::start_async().await;
    let login = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/customers/token")
                .header("scope", "auth")
                .json_body(json!({
                    "username": "maria@example.com",
                    "password": "correct horse"
                }));
            then.status(200).json_body(json!("issued-token"));
        })
        .await;
    let profile = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/customers/me")
                .header("authorization", "Bearer issued-token");
            then.status(200).json_body(user_payload());
        })
        .await;

    let mut clients = clients_for(&server);
    clients.initialize_all().unwrap();

    let token = api::auth::request_token(
        &clients.auth,
        "maria@example.com",
        &SecretString::from("correct horse"),
    )
    .await
    .unwrap();
    assert_eq!(token.expose_secret(), "issued-token");

    clients.authorize_all(&token).unwrap();
    assert_eq!(clients.cart.state(), RegistryState::Authorized);

    api::auth::fetch_profile(&clients.auth).await.unwrap();

    login.assert_async().await;
    profile.assert_async().await;
}

#[tokio::test]
async fn test_login_rejected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/customers/token");
            then.status(401).json_body(json!({
                "message": "The account sign-in was incorrect"
            }));
        })
        .await;

    let registry = initialized(&server, Domain::Auth);
    let err = api::auth::request_token(&registry, "maria@example.com", &SecretString::from("wrong"))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
}
