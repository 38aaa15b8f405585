//! Identity provider port.
//!
//! The identity provider owns credential storage and token issuance; this
//! backend only forwards to it. The trait below is the seam: the Firebase
//! identity toolkit client implements it for production, an in-memory fake
//! for tests and local development.

use async_trait::async_trait;

#[cfg(feature = "remote-store")]
pub mod firebase;
#[cfg(feature = "local-store")]
pub mod local;

#[cfg(feature = "remote-store")]
pub use firebase::{FirebaseAuthClient, FirebaseAuthConfig};
#[cfg(feature = "local-store")]
pub use local::LocalIdentityProvider;

/// Identity record freshly created by the provider.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    /// Provider-issued identifier for the credential record
    pub uid: String,
}

/// Result of a successful password-grant verification.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    /// Provider-issued identifier
    pub uid: String,
    /// Email the credentials were verified against
    pub email: String,
    /// Bearer token issued by the provider, passed through to the caller
    pub id_token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The email is already registered with the provider.
    #[error("Email already exists")]
    EmailExists,

    /// The provider rejected the request; the message is the provider's own
    /// error string (e.g. `INVALID_PASSWORD`) and is surfaced verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The provider could not be reached.
    #[error("identity request failed: {0}")]
    RequestFailed(String),

    /// The provider answered with an unexpected payload.
    #[error("invalid identity response: {0}")]
    InvalidResponse(String),
}

/// External identity service issuing and verifying credentials.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create a credential record for the given email and password.
    ///
    /// # Errors
    /// * [`IdentityError::EmailExists`] if the email is already registered
    async fn create_identity(
        &self,
        email: &str,
        password: &str,
    ) -> Result<NewIdentity, IdentityError>;

    /// Verify credentials via the password grant and obtain a bearer token.
    ///
    /// # Errors
    /// * [`IdentityError::Rejected`] when the provider refuses the pair
    async fn verify_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<VerifiedIdentity, IdentityError>;
}
