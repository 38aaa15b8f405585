//! Record types stored in the document database.
//!
//! These are transport-only entities: the backend never persists them
//! locally, it only moves them between the document store and the HTTP
//! surface.

use serde::{Deserialize, Serialize};

/// Application-level user record, keyed by username in the `users`
/// collection.
///
/// Distinct from the identity provider's own credential record. The
/// password is stored alongside the provider's copy; see DESIGN.md for the
/// open question around this duplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Point-of-interest record, keyed by place id in the `location`
/// collection.
///
/// The image URL is not part of the stored record; it is derived from the
/// place key when the record is mapped to an API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub place_id: String,
    pub name: String,
    pub rating: Option<f64>,
    pub reviews_count: Option<i64>,
    pub address: Option<String>,
    pub lat: f64,
    pub long: f64,
    pub category: Option<String>,
    pub caption_idn: Option<String>,
    pub caption_eng: Option<String>,
}
