//! Document store module for account and place data.
//!
//! This module provides abstractions for the external document database via
//! the Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! The database module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API handlers)                  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - Account flows              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────┐
//!     │ Local Repository │ Firestore REST │
//!     │   (in-memory)    │ (remote-store) │
//!     └──────────────────┴────────────────┘
//! ```
//!
//! The store is organized as two logical collections: `users`, keyed by
//! username, and `location`, keyed by place id. Username uniqueness is
//! enforced by an atomic create-if-absent write in every backend, not by a
//! read-then-write sequence.
//!
//! Repositories are constructed explicitly at startup and injected into the
//! HTTP state; there is no process-global instance.

// Feature flag check: at least one backend must be compiled in.
#[cfg(not(any(feature = "remote-store", feature = "local-store")))]
compile_error!("Enable at least one document store backend feature.");

pub mod models;
pub mod repositories;
pub mod repository;

pub use models::{Account, Place};
#[cfg(feature = "local-store")]
pub use repositories::LocalRepository;
#[cfg(feature = "remote-store")]
pub use repositories::{FirestoreConfig, FirestoreRepository};
pub use repository::{
    AccountRepository, FullRepository, PlaceRepository, RepositoryError, RepositoryResult,
};
