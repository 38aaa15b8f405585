//! In-memory repository implementation.
//!
//! Backs the repository traits with plain maps behind `parking_lot` locks.
//! Used by the test suite and for local development without Firestore
//! credentials. Seeding helpers (`insert_place`, `seed_places`) exist only
//! here; the `location` collection is read-only through the trait.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::models::{Account, Place};
use crate::db::repository::{
    AccountRepository, FullRepository, PlaceRepository, RepositoryError, RepositoryResult,
};

/// In-memory document store.
///
/// Accounts are keyed by username with a secondary email→username index so
/// login lookups stay keyed rather than scanning the collection.
#[derive(Default)]
pub struct LocalRepository {
    accounts: RwLock<HashMap<String, Account>>,
    email_index: RwLock<HashMap<String, String>>,
    places: RwLock<HashMap<String, Place>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a place record (test/dev seeding).
    pub fn insert_place(&self, place: Place) {
        self.places.write().insert(place.place_id.clone(), place);
    }

    /// Seed several place records at once (test/dev seeding).
    pub fn seed_places(&self, places: impl IntoIterator<Item = Place>) {
        let mut map = self.places.write();
        for place in places {
            map.insert(place.place_id.clone(), place);
        }
    }
}

#[async_trait]
impl AccountRepository for LocalRepository {
    async fn fetch_account(&self, username: &str) -> RepositoryResult<Option<Account>> {
        Ok(self.accounts.read().get(username).cloned())
    }

    async fn fetch_account_by_email(&self, email: &str) -> RepositoryResult<Option<Account>> {
        let index = self.email_index.read();
        let Some(username) = index.get(email) else {
            return Ok(None);
        };
        Ok(self.accounts.read().get(username).cloned())
    }

    async fn create_account(&self, account: &Account) -> RepositoryResult<()> {
        // Single write-lock section makes the existence check and the insert
        // one atomic step.
        let mut accounts = self.accounts.write();
        if accounts.contains_key(&account.username) {
            return Err(RepositoryError::already_exists(account.username.clone()));
        }
        accounts.insert(account.username.clone(), account.clone());
        self.email_index
            .write()
            .insert(account.email.clone(), account.username.clone());
        Ok(())
    }
}

#[async_trait]
impl PlaceRepository for LocalRepository {
    async fn fetch_place(&self, place_id: &str) -> RepositoryResult<Option<Place>> {
        Ok(self.places.read().get(place_id).cloned())
    }

    async fn list_places(&self) -> RepositoryResult<Vec<Place>> {
        Ok(self.places.read().values().cloned().collect())
    }
}

#[async_trait]
impl FullRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(username: &str, email: &str) -> Account {
        Account {
            username: username.to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_fetch() {
        let repo = LocalRepository::new();
        repo.create_account(&account("alice", "a@x.com"))
            .await
            .unwrap();

        let fetched = repo.fetch_account("alice").await.unwrap().unwrap();
        assert_eq!(fetched.email, "a@x.com");
        assert!(repo.fetch_account("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_is_conditional_on_absent() {
        let repo = LocalRepository::new();
        repo.create_account(&account("alice", "a@x.com"))
            .await
            .unwrap();

        let err = repo
            .create_account(&account("alice", "b@y.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));

        // The original record is untouched.
        let fetched = repo.fetch_account("alice").await.unwrap().unwrap();
        assert_eq!(fetched.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_email_lookup_is_keyed() {
        let repo = LocalRepository::new();
        repo.create_account(&account("alice", "a@x.com"))
            .await
            .unwrap();
        repo.create_account(&account("bob", "b@y.com"))
            .await
            .unwrap();

        let found = repo.fetch_account_by_email("b@y.com").await.unwrap();
        assert_eq!(found.unwrap().username, "bob");
        assert!(repo
            .fetch_account_by_email("nobody@z.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_place_lookup_and_listing() {
        let repo = LocalRepository::new();
        repo.insert_place(Place {
            place_id: "p1".to_string(),
            name: "Borobudur".to_string(),
            rating: Some(4.7),
            reviews_count: Some(1200),
            address: Some("Magelang".to_string()),
            lat: -7.6079,
            long: 110.2038,
            category: Some("temple".to_string()),
            caption_idn: None,
            caption_eng: None,
        });

        assert!(repo.fetch_place("p1").await.unwrap().is_some());
        assert!(repo.fetch_place("p2").await.unwrap().is_none());
        assert_eq!(repo.list_places().await.unwrap().len(), 1);
    }
}
