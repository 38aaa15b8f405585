//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint. The account endpoints
//! delegate to the service layer; the place endpoints are key lookups and
//! scans straight against the repository.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{
    AccountResponse, AuthResponse, HealthResponse, LoginRequest, LoginResponse, MessageResponse,
    PlaceCoordinatesDto, PlaceDto, SignupRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Root & Health
// =============================================================================

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "REST API for Journey on Solo".to_string(),
    })
}

/// GET /health
///
/// Health check endpoint to verify the service is running and the document
/// store is reachable.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database,
    })
}

// =============================================================================
// Accounts
// =============================================================================

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> HandlerResult<AuthResponse> {
    let identity = services::signup(
        state.repository.as_ref(),
        state.identity.as_ref(),
        &request.username,
        &request.email,
        &request.password,
    )
    .await
    .map_err(|e| AppError::rejected("Signup failed", e.to_string()))?;

    Ok(Json(AuthResponse {
        message: "Signup successful".to_string(),
        token: identity.uid,
    }))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> HandlerResult<LoginResponse> {
    let outcome = services::login(
        state.repository.as_ref(),
        state.identity.as_ref(),
        &request.email,
        &request.password,
    )
    .await
    .map_err(|e| AppError::rejected("Login failed", e.to_string()))?;

    Ok(Json(LoginResponse {
        error: false,
        message: "success".to_string(),
        login_result: Some(outcome.into()),
    }))
}

/// GET /user/{username}
pub async fn get_account(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> HandlerResult<AccountResponse> {
    let account = state
        .repository
        .fetch_account(&username)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("User with username '{}' not found", username))
        })?;

    Ok(Json(account.into()))
}

// =============================================================================
// Places
// =============================================================================

/// GET /data
pub async fn list_places(State(state): State<AppState>) -> HandlerResult<Vec<PlaceDto>> {
    let places = state.repository.list_places().await?;
    let dtos = places
        .iter()
        .map(|place| PlaceDto::from_place(place, &state.image_base_url))
        .collect();
    Ok(Json(dtos))
}

/// GET /data/{place_id}
pub async fn get_place(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> HandlerResult<PlaceDto> {
    let place = state
        .repository
        .fetch_place(&place_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Document with place_id '{}' not found", place_id))
        })?;

    Ok(Json(PlaceDto::from_place(&place, &state.image_base_url)))
}

/// GET /coordinates
pub async fn list_coordinates(
    State(state): State<AppState>,
) -> HandlerResult<Vec<PlaceCoordinatesDto>> {
    let places = state.repository.list_places().await?;
    Ok(Json(places.iter().map(PlaceCoordinatesDto::from).collect()))
}

/// GET /coordinates/{place_id}
pub async fn get_place_coordinates(
    State(state): State<AppState>,
    Path(place_id): Path<String>,
) -> HandlerResult<PlaceCoordinatesDto> {
    let place = state
        .repository
        .fetch_place(&place_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Document with place_id '{}' not found", place_id))
        })?;

    Ok(Json(PlaceCoordinatesDto::from(&place)))
}
