//! Repository traits for the document store.
//!
//! These traits are the only seam between the service/HTTP layers and the
//! external document database. Implementations live in
//! [`crate::db::repositories`]: an in-memory one for tests and local
//! development, and a Firestore REST one for production.

use async_trait::async_trait;

use crate::db::models::{Account, Place};

pub mod error;

pub use error::{RepositoryError, RepositoryResult};

/// Repository trait for the `users` collection.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fetch an account by its username key.
    ///
    /// Returns `Ok(None)` when no record exists under that key.
    async fn fetch_account(&self, username: &str) -> RepositoryResult<Option<Account>>;

    /// Fetch the account registered under the given email.
    ///
    /// Lookup is keyed (secondary index or structured query), not a
    /// collection scan; the observable contract is found / not found.
    async fn fetch_account_by_email(&self, email: &str) -> RepositoryResult<Option<Account>>;

    /// Store a new account under its username key, failing if the key is
    /// already taken.
    ///
    /// The create is conditional-on-absent in a single store operation, so
    /// two concurrent signups with the same username cannot both succeed.
    ///
    /// # Errors
    /// * [`RepositoryError::AlreadyExists`] if the username is taken
    async fn create_account(&self, account: &Account) -> RepositoryResult<()>;
}

/// Repository trait for the `location` collection (read-only).
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Fetch a place by its key.
    ///
    /// Returns `Ok(None)` when no record exists under that key.
    async fn fetch_place(&self, place_id: &str) -> RepositoryResult<Option<Place>>;

    /// Fetch the entire place collection.
    async fn list_places(&self) -> RepositoryResult<Vec<Place>>;
}

/// Combined repository interface covering both collections.
///
/// Handlers hold an `Arc<dyn FullRepository>` so a single backend instance
/// serves every route.
#[async_trait]
pub trait FullRepository: AccountRepository + PlaceRepository {
    /// Check that the store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
