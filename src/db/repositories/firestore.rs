//! Firestore REST repository implementation.
//!
//! Talks to the Firestore documents API over HTTPS. Only the small slice of
//! the API this backend needs is covered: key lookup, collection list, a
//! conditional create, and a single-field equality query.
//!
//! Documents carry typed value envelopes (`stringValue`, `doubleValue`,
//! `integerValue`); the mapping helpers below translate between those and
//! the record types. `integerValue` is string-encoded on the wire.

use std::env;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::db::models::{Account, Place};
use crate::db::repository::{
    AccountRepository, FullRepository, PlaceRepository, RepositoryError, RepositoryResult,
};

/// Default Firestore API endpoint.
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";

/// Collection holding account records, keyed by username.
pub const USERS_COLLECTION: &str = "users";

/// Collection holding place records, keyed by place id.
pub const PLACES_COLLECTION: &str = "location";

/// Firestore connection configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// Firestore API base URL
    pub base_url: String,
    /// Google Cloud project id
    pub project_id: String,
    /// Optional OAuth bearer token for authenticated access
    pub access_token: Option<String>,
}

impl FirestoreConfig {
    /// Create a new Firestore configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `FIRESTORE_PROJECT_ID` (required): Google Cloud project id
    /// - `FIRESTORE_BASE_URL` (optional): API endpoint override, useful for
    ///   emulators
    /// - `FIRESTORE_ACCESS_TOKEN` (optional): OAuth bearer token attached to
    ///   every request
    ///
    /// # Errors
    /// Returns an error if required variables are not set.
    pub fn from_env() -> Result<Self, String> {
        let project_id = env::var("FIRESTORE_PROJECT_ID")
            .map_err(|_| "FIRESTORE_PROJECT_ID environment variable not set".to_string())?;
        let base_url = env::var("FIRESTORE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_FIRESTORE_BASE_URL.to_string());
        let access_token = env::var("FIRESTORE_ACCESS_TOKEN").ok();

        Ok(Self {
            base_url,
            project_id,
            access_token,
        })
    }
}

/// Repository backed by the Firestore REST documents API.
#[derive(Clone)]
pub struct FirestoreRepository {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    access_token: Option<String>,
}

impl FirestoreRepository {
    pub fn new(config: FirestoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project_id: config.project_id,
            access_token: config.access_token,
        }
    }

    /// Create a repository from environment variables.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self::new(FirestoreConfig::from_env()?))
    }

    fn documents_root(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents",
            self.base_url, self.project_id
        )
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetch a single document; `Ok(None)` when the key is absent.
    async fn fetch_document(
        &self,
        collection: &str,
        key: &str,
    ) -> RepositoryResult<Option<Value>> {
        let url = format!("{}/{}/{}", self.documents_root(), collection, key);
        let response = self
            .with_auth(self.client.get(&url))
            .send()
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, collection, key, "document fetch failed");
            return Err(RepositoryError::backend(format!("{}: {}", status, body)));
        }

        let document = response
            .json()
            .await
            .map_err(|e| RepositoryError::invalid_record(e.to_string()))?;
        Ok(Some(document))
    }

    /// List every document in a collection.
    async fn list_documents(&self, collection: &str) -> RepositoryResult<Vec<Value>> {
        let url = format!("{}/{}", self.documents_root(), collection);
        let response = self
            .with_auth(self.client.get(&url))
            .send()
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, collection, "collection list failed");
            return Err(RepositoryError::backend(format!("{}: {}", status, body)));
        }

        let listing: Value = response
            .json()
            .await
            .map_err(|e| RepositoryError::invalid_record(e.to_string()))?;
        // An empty collection has no "documents" key at all.
        let documents = listing
            .get("documents")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        debug!(collection, count = documents.len(), "listed collection");
        Ok(documents)
    }
}

#[async_trait]
impl AccountRepository for FirestoreRepository {
    async fn fetch_account(&self, username: &str) -> RepositoryResult<Option<Account>> {
        match self.fetch_document(USERS_COLLECTION, username).await? {
            Some(document) => Ok(Some(account_from_document(&document)?)),
            None => Ok(None),
        }
    }

    async fn fetch_account_by_email(&self, email: &str) -> RepositoryResult<Option<Account>> {
        let url = format!("{}:runQuery", self.documents_root());
        let body = json!({
            "structuredQuery": {
                "from": [{ "collectionId": USERS_COLLECTION }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": "email" },
                        "op": "EQUAL",
                        "value": { "stringValue": email }
                    }
                },
                "limit": 1
            }
        });

        let response = self
            .with_auth(self.client.post(&url).json(&body))
            .send()
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RepositoryError::backend(format!("{}: {}", status, body)));
        }

        // runQuery responds with a batch of result wrappers; rows matching
        // the filter carry a "document" entry.
        let results: Vec<Value> = response
            .json()
            .await
            .map_err(|e| RepositoryError::invalid_record(e.to_string()))?;
        for result in &results {
            if let Some(document) = result.get("document") {
                return Ok(Some(account_from_document(document)?));
            }
        }
        Ok(None)
    }

    async fn create_account(&self, account: &Account) -> RepositoryResult<()> {
        // createDocument with an explicit documentId fails with 409 when the
        // key is taken, which makes the uniqueness check a single atomic
        // write instead of a racy read-then-write.
        let url = format!(
            "{}/{}?documentId={}",
            self.documents_root(),
            USERS_COLLECTION,
            account.username
        );
        let response = self
            .with_auth(self.client.post(&url).json(&account_to_fields(account)))
            .send()
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        if response.status() == StatusCode::CONFLICT {
            return Err(RepositoryError::already_exists(account.username.clone()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, username = %account.username, "account create failed");
            return Err(RepositoryError::backend(format!("{}: {}", status, body)));
        }
        debug!(username = %account.username, "account record created");
        Ok(())
    }
}

#[async_trait]
impl PlaceRepository for FirestoreRepository {
    async fn fetch_place(&self, place_id: &str) -> RepositoryResult<Option<Place>> {
        match self.fetch_document(PLACES_COLLECTION, place_id).await? {
            Some(document) => Ok(Some(place_from_document(&document)?)),
            None => Ok(None),
        }
    }

    async fn list_places(&self) -> RepositoryResult<Vec<Place>> {
        self.list_documents(PLACES_COLLECTION)
            .await?
            .iter()
            .map(place_from_document)
            .collect()
    }
}

#[async_trait]
impl FullRepository for FirestoreRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let url = format!("{}/{}?pageSize=1", self.documents_root(), USERS_COLLECTION);
        let response = self
            .with_auth(self.client.get(&url))
            .send()
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;
        Ok(response.status().is_success())
    }
}

// =============================================================================
// Document mapping
// =============================================================================

/// Extract the document key from its full resource name
/// (`projects/.../documents/<collection>/<key>`).
fn document_key(document: &Value) -> Option<&str> {
    document
        .get("name")
        .and_then(Value::as_str)
        .and_then(|name| name.rsplit('/').next())
}

fn string_field(document: &Value, field: &str) -> Option<String> {
    document
        .get("fields")?
        .get(field)?
        .get("stringValue")?
        .as_str()
        .map(str::to_string)
}

fn f64_field(document: &Value, field: &str) -> Option<f64> {
    let value = document.get("fields")?.get(field)?;
    if let Some(double) = value.get("doubleValue").and_then(Value::as_f64) {
        return Some(double);
    }
    value
        .get("integerValue")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
}

fn i64_field(document: &Value, field: &str) -> Option<i64> {
    let value = document.get("fields")?.get(field)?;
    if let Some(int) = value
        .get("integerValue")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
    {
        return Some(int);
    }
    value
        .get("doubleValue")
        .and_then(Value::as_f64)
        .map(|d| d as i64)
}

fn account_from_document(document: &Value) -> RepositoryResult<Account> {
    let username = string_field(document, "username")
        .or_else(|| document_key(document).map(str::to_string))
        .ok_or_else(|| RepositoryError::invalid_record("account document missing username"))?;
    let email = string_field(document, "email")
        .ok_or_else(|| RepositoryError::invalid_record("account document missing email"))?;
    let password = string_field(document, "password")
        .ok_or_else(|| RepositoryError::invalid_record("account document missing password"))?;

    Ok(Account {
        username,
        email,
        password,
    })
}

fn place_from_document(document: &Value) -> RepositoryResult<Place> {
    let place_id = document_key(document)
        .ok_or_else(|| RepositoryError::invalid_record("place document missing name"))?
        .to_string();
    let name = string_field(document, "name")
        .ok_or_else(|| RepositoryError::invalid_record("place document missing name field"))?;
    let lat = f64_field(document, "lat")
        .ok_or_else(|| RepositoryError::invalid_record("place document missing lat"))?;
    let long = f64_field(document, "long")
        .ok_or_else(|| RepositoryError::invalid_record("place document missing long"))?;

    Ok(Place {
        place_id,
        name,
        rating: f64_field(document, "rating"),
        reviews_count: i64_field(document, "reviews_count"),
        address: string_field(document, "address"),
        lat,
        long,
        category: string_field(document, "category"),
        caption_idn: string_field(document, "caption_idn"),
        caption_eng: string_field(document, "caption_eng"),
    })
}

fn account_to_fields(account: &Account) -> Value {
    json!({
        "fields": {
            "username": { "stringValue": account.username },
            "email": { "stringValue": account.email },
            "password": { "stringValue": account.password },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_document() -> Value {
        json!({
            "name": "projects/demo/databases/(default)/documents/location/p1",
            "fields": {
                "name": { "stringValue": "Borobudur" },
                "rating": { "doubleValue": 4.7 },
                "reviews_count": { "integerValue": "1200" },
                "address": { "stringValue": "Magelang" },
                "lat": { "doubleValue": -7.6079 },
                "long": { "doubleValue": 110.2038 },
                "category": { "stringValue": "temple" },
                "caption_idn": { "stringValue": "Candi Buddha terbesar" },
                "caption_eng": { "stringValue": "Largest Buddhist temple" },
            }
        })
    }

    #[test]
    fn test_place_from_document() {
        let place = place_from_document(&place_document()).unwrap();
        assert_eq!(place.place_id, "p1");
        assert_eq!(place.name, "Borobudur");
        assert_eq!(place.rating, Some(4.7));
        assert_eq!(place.reviews_count, Some(1200));
        assert_eq!(place.lat, -7.6079);
    }

    #[test]
    fn test_place_integer_coordinates_accepted() {
        // Firestore stores whole numbers as integerValue even in numeric
        // fields written as doubles elsewhere.
        let document = json!({
            "name": "projects/demo/databases/(default)/documents/location/p2",
            "fields": {
                "name": { "stringValue": "Monas" },
                "lat": { "integerValue": "-6" },
                "long": { "integerValue": "106" },
            }
        });
        let place = place_from_document(&document).unwrap();
        assert_eq!(place.lat, -6.0);
        assert_eq!(place.long, 106.0);
        assert!(place.rating.is_none());
    }

    #[test]
    fn test_place_missing_coordinates_is_invalid() {
        let document = json!({
            "name": "projects/demo/databases/(default)/documents/location/p3",
            "fields": { "name": { "stringValue": "Nowhere" } }
        });
        let err = place_from_document(&document).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidRecord(_)));
    }

    #[test]
    fn test_account_document_roundtrip() {
        let account = Account {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password: "pw1".to_string(),
        };
        let mut document = account_to_fields(&account);
        document["name"] =
            json!("projects/demo/databases/(default)/documents/users/alice");

        let back = account_from_document(&document).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn test_account_username_falls_back_to_key() {
        let document = json!({
            "name": "projects/demo/databases/(default)/documents/users/bob",
            "fields": {
                "email": { "stringValue": "b@y.com" },
                "password": { "stringValue": "pw" },
            }
        });
        let account = account_from_document(&document).unwrap();
        assert_eq!(account.username, "bob");
    }
}
