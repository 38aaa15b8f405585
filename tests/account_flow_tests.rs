//! End-to-end account flow tests against the in-memory backends.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use journey_backend::auth::{IdentityProvider, LocalIdentityProvider};
use journey_backend::db::repositories::LocalRepository;
use journey_backend::http::dto::{LoginRequest, SignupRequest};
use journey_backend::http::{handlers, AppState};

fn test_state() -> AppState {
    AppState::new(
        Arc::new(LocalRepository::new()),
        Arc::new(LocalIdentityProvider::new()),
        "http://34.101.153.83:3000",
    )
}

fn signup_request(username: &str, email: &str, password: &str) -> SignupRequest {
    SignupRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_signup_then_lookup_then_duplicate_signup() {
    let state = test_state();

    // signup("alice","a@x.com","pw1") -> 200 with an issued identity id
    let Json(created) = handlers::signup(
        State(state.clone()),
        Json(signup_request("alice", "a@x.com", "pw1")),
    )
    .await
    .unwrap();
    assert_eq!(created.message, "Signup successful");
    assert!(!created.token.is_empty());

    // get_account("alice") returns the stored record
    let Json(account) = handlers::get_account(State(state.clone()), Path("alice".to_string()))
        .await
        .unwrap();
    assert_eq!(account.username, "alice");
    assert_eq!(account.email, "a@x.com");
    assert_eq!(account.password, "pw1");

    // signup("alice","b@y.com","pw2") -> 400 "Username already exists"
    let err = handlers::signup(
        State(state.clone()),
        Json(signup_request("alice", "b@y.com", "pw2")),
    )
    .await
    .unwrap_err();
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_with_registered_email_is_rejected() {
    let state = test_state();
    handlers::signup(
        State(state.clone()),
        Json(signup_request("alice", "a@x.com", "pw1")),
    )
    .await
    .unwrap();

    let err = handlers::signup(
        State(state.clone()),
        Json(signup_request("bob", "a@x.com", "pw2")),
    )
    .await
    .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_happy_path_returns_account_and_token() {
    let state = test_state();
    handlers::signup(
        State(state.clone()),
        Json(signup_request("alice", "a@x.com", "pw1")),
    )
    .await
    .unwrap();

    let Json(response) = handlers::login(
        State(state.clone()),
        Json(LoginRequest {
            email: "a@x.com".to_string(),
            password: "pw1".to_string(),
        }),
    )
    .await
    .unwrap();

    assert!(!response.error);
    assert_eq!(response.message, "success");
    let result = response.login_result.unwrap();
    assert_eq!(result.username, "alice");
    assert_eq!(result.email, "a@x.com");
    assert!(!result.token.is_empty());
}

#[tokio::test]
async fn test_login_with_bad_credentials_is_400() {
    let state = test_state();
    handlers::signup(
        State(state.clone()),
        Json(signup_request("alice", "a@x.com", "pw1")),
    )
    .await
    .unwrap();

    let err = handlers::login(
        State(state.clone()),
        Json(LoginRequest {
            email: "a@x.com".to_string(),
            password: "wrong".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_without_account_record_is_400() {
    let state = test_state();
    // Register the credential directly with the provider so verification
    // succeeds but no account document exists.
    state
        .identity
        .create_identity("a@x.com", "pw1")
        .await
        .unwrap();

    let err = handlers::login(
        State(state.clone()),
        Json(LoginRequest {
            email: "a@x.com".to_string(),
            password: "pw1".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_account_lookup_is_404() {
    let state = test_state();
    let err = handlers::get_account(State(state), Path("ghost".to_string()))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}
