//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;

/// API error response body.
///
/// `message` is human-readable; `error`, when present, carries the error
/// string copied from the underlying failure or the identity provider's
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404)
    NotFound(String),
    /// Request refused by a flow: taken username, bad credentials, missing
    /// account record (400)
    Rejected { message: String, error: String },
    /// Backend failure talking to an external service (500)
    Internal(String),
}

impl AppError {
    pub fn rejected(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
            error: error.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    message,
                    error: None,
                },
            ),
            AppError::Rejected { message, error } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message,
                    error: Some(error),
                },
            ),
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message,
                    error: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let response = AppError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response =
            AppError::rejected("Signup failed", "Username already exists").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_omits_empty_error_field() {
        let body = ErrorBody {
            message: "nope".to_string(),
            error: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("error").is_none());

        let body = ErrorBody {
            message: "Login failed".to_string(),
            error: Some("INVALID_PASSWORD".to_string()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "INVALID_PASSWORD");
    }
}
