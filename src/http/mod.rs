//! HTTP server module.
//!
//! This module provides an axum-based HTTP server exposing the account and
//! place endpoints as a REST API. It reuses the service layer, the
//! repository traits, and the identity provider port from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! │  - Request parsing and validation                        │
//! │  - JSON serialization/deserialization                    │
//! │  - CORS, compression, error handling                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                               │
//! │  - Signup / login flows                                  │
//! └─────────┬──────────────────────────────┬─────────────────┘
//!           │                              │
//! ┌─────────▼─────────────┐  ┌─────────────▼─────────────────┐
//! │  Identity Port (auth/) │  │  Repository Layer (db/)       │
//! │  Firebase / local      │  │  Firestore / local            │
//! └────────────────────────┘  └───────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
