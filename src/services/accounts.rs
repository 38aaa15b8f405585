//! Account flows: signup and login.
//!
//! Both flows coordinate the identity provider and the document store in
//! sequence. Neither retries: any failure from either service is final and
//! surfaced to the caller.

use tracing::{debug, info};

use crate::auth::{IdentityError, IdentityProvider, NewIdentity};
use crate::db::models::Account;
use crate::db::repository::{FullRepository, RepositoryError};

/// Failure modes of the signup flow.
///
/// Every variant maps to a 400 at the HTTP layer; the display string is the
/// `error` field of the response body.
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Email already exists")]
    EmailTaken,

    #[error("{0}")]
    Identity(IdentityError),

    #[error("{0}")]
    Store(#[from] RepositoryError),
}

/// Failure modes of the login flow.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Identity verified but no account record matches the email.
    #[error("User not found")]
    AccountMissing,

    #[error("{0}")]
    Identity(#[from] IdentityError),

    #[error("{0}")]
    Store(#[from] RepositoryError),
}

/// Successful login payload: account fields plus the provider's token.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub username: String,
    pub email: String,
    pub token: String,
}

/// Register a new account.
///
/// Creates the credential record with the identity provider, then stores
/// the account document keyed by username. The username check happens
/// twice: a fast pre-check so a taken name fails before the provider call
/// regardless of email, and the conditional create itself, which closes the
/// race window two concurrent signups would otherwise slip through.
pub async fn signup(
    repository: &dyn FullRepository,
    identity: &dyn IdentityProvider,
    username: &str,
    email: &str,
    password: &str,
) -> Result<NewIdentity, SignupError> {
    if repository.fetch_account(username).await?.is_some() {
        debug!(username, "signup rejected, username taken");
        return Err(SignupError::UsernameTaken);
    }

    let created = identity
        .create_identity(email, password)
        .await
        .map_err(|e| match e {
            IdentityError::EmailExists => SignupError::EmailTaken,
            other => SignupError::Identity(other),
        })?;

    let account = Account {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    match repository.create_account(&account).await {
        Ok(()) => {
            info!(username, "account created");
            Ok(created)
        }
        Err(RepositoryError::AlreadyExists(_)) => Err(SignupError::UsernameTaken),
        Err(e) => Err(SignupError::Store(e)),
    }
}

/// Verify credentials and look up the matching account record.
///
/// Two sequential external calls: the password grant against the identity
/// provider, then a keyed email lookup in the document store. A verified
/// identity without an account record is a login failure, not a server
/// error.
pub async fn login(
    repository: &dyn FullRepository,
    identity: &dyn IdentityProvider,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, LoginError> {
    let verified = identity.verify_password(email, password).await?;

    let account = repository
        .fetch_account_by_email(email)
        .await?
        .ok_or(LoginError::AccountMissing)?;

    debug!(username = %account.username, "login verified");
    Ok(LoginOutcome {
        username: account.username,
        email: account.email,
        token: verified.id_token,
    })
}
