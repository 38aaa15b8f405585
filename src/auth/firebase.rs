//! Firebase identity toolkit client.
//!
//! Wraps the two identity toolkit REST calls this backend uses: account
//! creation (`accounts:signUp`) and password-grant verification
//! (`accounts:signInWithPassword`). Both are keyed by the project API key.

use std::env;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{IdentityError, IdentityProvider, NewIdentity, VerifiedIdentity};

/// Default identity toolkit endpoint.
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

/// Provider error string for an already-registered email.
const EMAIL_EXISTS: &str = "EMAIL_EXISTS";

/// Identity toolkit configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct FirebaseAuthConfig {
    /// Identity toolkit base URL
    pub base_url: String,
    /// Project API key appended to every call
    pub api_key: String,
}

impl FirebaseAuthConfig {
    /// Create a new identity toolkit configuration from environment
    /// variables.
    ///
    /// # Environment Variables
    /// - `FIREBASE_API_KEY` (required): Project API key
    /// - `FIREBASE_AUTH_BASE_URL` (optional): Endpoint override, useful for
    ///   emulators
    ///
    /// # Errors
    /// Returns an error if required variables are not set.
    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("FIREBASE_API_KEY")
            .map_err(|_| "FIREBASE_API_KEY environment variable not set".to_string())?;
        let base_url = env::var("FIREBASE_AUTH_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_IDENTITY_BASE_URL.to_string());

        Ok(Self { base_url, api_key })
    }
}

/// Client for the Firebase identity toolkit REST API.
#[derive(Clone)]
pub struct FirebaseAuthClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FirebaseAuthClient {
    pub fn new(config: FirebaseAuthConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self::new(FirebaseAuthConfig::from_env()?))
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/v1/accounts:{}?key={}", self.base_url, action, self.api_key)
    }
}

#[async_trait]
impl IdentityProvider for FirebaseAuthClient {
    async fn create_identity(
        &self,
        email: &str,
        password: &str,
    ) -> Result<NewIdentity, IdentityError> {
        let response = self
            .client
            .post(self.endpoint("signUp"))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "returnSecureToken": false,
            }))
            .send()
            .await
            .map_err(|e| IdentityError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let message = error_message(response).await;
            warn!(%message, "identity creation rejected");
            if message == EMAIL_EXISTS {
                return Err(IdentityError::EmailExists);
            }
            return Err(IdentityError::Rejected(message));
        }

        let created: SignUpResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::InvalidResponse(e.to_string()))?;
        debug!(uid = %created.local_id, "identity record created");
        Ok(NewIdentity {
            uid: created.local_id,
        })
    }

    async fn verify_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<VerifiedIdentity, IdentityError> {
        let response = self
            .client
            .post(self.endpoint("signInWithPassword"))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await
            .map_err(|e| IdentityError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let message = error_message(response).await;
            return Err(IdentityError::Rejected(message));
        }

        let verified: SignInResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::InvalidResponse(e.to_string()))?;
        Ok(VerifiedIdentity {
            uid: verified.local_id,
            email: verified.email.unwrap_or_else(|| email.to_string()),
            id_token: verified.id_token,
        })
    }
}

/// Pull the provider's error string out of a failed response.
///
/// The identity toolkit wraps failures as `{"error": {"message": ...}}`.
async fn error_message(response: reqwest::Response) -> String {
    let body: serde_json::Value = match response.json().await {
        Ok(body) => body,
        Err(_) => return "Unknown error".to_string(),
    };
    parse_error_message(&body)
}

fn parse_error_message(body: &serde_json::Value) -> String {
    body.get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .unwrap_or("Unknown error")
        .to_string()
}

// =============================================================================
// Identity toolkit wire types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    local_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    id_token: String,
    local_id: String,
    email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let body = serde_json::json!({
            "error": { "code": 400, "message": "INVALID_PASSWORD" }
        });
        assert_eq!(parse_error_message(&body), "INVALID_PASSWORD");

        let body = serde_json::json!({ "unexpected": true });
        assert_eq!(parse_error_message(&body), "Unknown error");
    }

    #[test]
    fn test_sign_in_response_camel_case() {
        let verified: SignInResponse = serde_json::from_value(serde_json::json!({
            "idToken": "tok",
            "localId": "uid1",
            "email": "a@x.com",
            "registered": true,
        }))
        .unwrap();
        assert_eq!(verified.id_token, "tok");
        assert_eq!(verified.local_id, "uid1");
    }

    #[test]
    fn test_endpoint_includes_api_key() {
        let client = FirebaseAuthClient::new(FirebaseAuthConfig {
            base_url: "https://identitytoolkit.googleapis.com/".to_string(),
            api_key: "k123".to_string(),
        });
        assert_eq!(
            client.endpoint("signUp"),
            "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=k123"
        );
    }
}
