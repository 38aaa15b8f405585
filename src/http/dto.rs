//! Data Transfer Objects for the HTTP API.
//!
//! Field names are the wire contract the mobile frontend depends on:
//! `loginResult` is camelCase, place fields keep their stored names, and
//! optional place fields serialize as explicit nulls.

use serde::{Deserialize, Serialize};

use crate::db::models::{Account, Place};
use crate::services::LoginOutcome;

/// Request body for account creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for the password-grant login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for successful signup; `token` is the issued identity id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
}

/// Response for successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub error: bool,
    pub message: String,
    #[serde(rename = "loginResult", skip_serializing_if = "Option::is_none")]
    pub login_result: Option<LoginResult>,
}

/// Account fields plus the provider's bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    pub username: String,
    pub email: String,
    pub token: String,
}

impl From<LoginOutcome> for LoginResult {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            username: outcome.username,
            email: outcome.email,
            token: outcome.token,
        }
    }
}

/// Account detail response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            username: account.username,
            email: account.email,
            password: account.password,
        }
    }
}

/// Place output shape with the synthesized image URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDto {
    pub place_id: String,
    pub name: String,
    pub rating: Option<f64>,
    pub reviews_count: Option<i64>,
    pub address: Option<String>,
    pub lat: f64,
    pub long: f64,
    pub category: Option<String>,
    pub image_url: String,
    pub caption_idn: Option<String>,
    pub caption_eng: Option<String>,
}

impl PlaceDto {
    /// Map a stored place record to its output shape, deriving the image
    /// URL from the place key.
    pub fn from_place(place: &Place, image_base_url: &str) -> Self {
        Self {
            place_id: place.place_id.clone(),
            name: place.name.clone(),
            rating: place.rating,
            reviews_count: place.reviews_count,
            address: place.address.clone(),
            lat: place.lat,
            long: place.long,
            category: place.category.clone(),
            image_url: image_url(image_base_url, &place.place_id),
            caption_idn: place.caption_idn.clone(),
            caption_eng: place.caption_eng.clone(),
        }
    }
}

/// Coordinates-only projection of a place record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceCoordinatesDto {
    pub place_id: String,
    pub name: String,
    pub lat: f64,
    pub long: f64,
}

impl From<&Place> for PlaceCoordinatesDto {
    fn from(place: &Place) -> Self {
        Self {
            place_id: place.place_id.clone(),
            name: place.name.clone(),
            lat: place.lat,
            long: place.long,
        }
    }
}

/// Static message response (root endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Document store connection status
    pub database: String,
}

/// Synthesize the image URL for a place key.
///
/// Deterministic: fixed prefix, the key, and a `.jpg` suffix. There is no
/// existence check against the image host.
pub fn image_url(base_url: &str, place_id: &str) -> String {
    format!("{}/img/{}.jpg", base_url.trim_end_matches('/'), place_id)
}
