//! # Journey Backend
//!
//! REST backend for the Journey on Solo travel application.
//!
//! This crate exposes signup/login and place-lookup endpoints backed by a
//! managed identity provider (Firebase identity toolkit) and a managed
//! document database (Firestore). Every endpoint validates the request
//! shape, forwards to the external service, reshapes the result, and
//! returns JSON.
//!
//! ## Features
//!
//! - **Accounts**: signup with atomic username reservation, password-grant
//!   login, account detail lookup
//! - **Places**: point-of-interest listing and key lookup with synthesized
//!   image URLs, plus a coordinates-only projection
//! - **HTTP API**: axum-based REST endpoints for the mobile frontend
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`auth`]: Identity provider port and its Firebase / in-memory backends
//! - [`db`]: Document store repository traits and their backends
//! - [`services`]: Account flows orchestrating both external services
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: Server configuration from environment variables
//!
//! Backends are selected by feature flag: `local-store` provides in-memory
//! fakes for tests and development, `remote-store` the Firebase/Firestore
//! REST clients. The binary constructs the selected clients once at startup
//! and injects them into the router state; there is no ambient global state.

pub mod auth;
pub mod config;
pub mod db;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
