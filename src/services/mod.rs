//! High-level business flows.
//!
//! Handlers delegate here for the operations that touch more than one
//! external service; simple key lookups go straight to the repository.

pub mod accounts;

pub use accounts::{login, signup, LoginError, LoginOutcome, SignupError};
