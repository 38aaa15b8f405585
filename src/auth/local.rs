//! In-memory identity provider for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{IdentityError, IdentityProvider, NewIdentity, VerifiedIdentity};

/// Provider error string mirroring what the real toolkit returns for an
/// unknown email.
const EMAIL_NOT_FOUND: &str = "EMAIL_NOT_FOUND";
const INVALID_PASSWORD: &str = "INVALID_PASSWORD";

struct Credential {
    uid: String,
    password: String,
}

/// Identity provider keeping credential records in a map.
///
/// Tokens and uids are random and fresh per call, like the real provider's.
#[derive(Default)]
pub struct LocalIdentityProvider {
    credentials: RwLock<HashMap<String, Credential>>,
}

impl LocalIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn create_identity(
        &self,
        email: &str,
        password: &str,
    ) -> Result<NewIdentity, IdentityError> {
        let mut credentials = self.credentials.write();
        if credentials.contains_key(email) {
            return Err(IdentityError::EmailExists);
        }

        let uid = Uuid::new_v4().to_string();
        credentials.insert(
            email.to_string(),
            Credential {
                uid: uid.clone(),
                password: password.to_string(),
            },
        );
        Ok(NewIdentity { uid })
    }

    async fn verify_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<VerifiedIdentity, IdentityError> {
        let credentials = self.credentials.read();
        let credential = credentials
            .get(email)
            .ok_or_else(|| IdentityError::Rejected(EMAIL_NOT_FOUND.to_string()))?;
        if credential.password != password {
            return Err(IdentityError::Rejected(INVALID_PASSWORD.to_string()));
        }

        Ok(VerifiedIdentity {
            uid: credential.uid.clone(),
            email: email.to_string(),
            id_token: Uuid::new_v4().to_string(),
        })
    }
}
