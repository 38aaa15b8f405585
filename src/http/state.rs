//! Application state for the HTTP server.

use std::sync::Arc;

use crate::auth::IdentityProvider;
use crate::db::repository::FullRepository;

/// Shared application state passed to all handlers.
///
/// Both clients are constructed once in the binary and injected here, so
/// tests can substitute the in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    /// Document store client
    pub repository: Arc<dyn FullRepository>,
    /// Identity provider client
    pub identity: Arc<dyn IdentityProvider>,
    /// Base URL of the external image host, used to synthesize place image
    /// URLs
    pub image_base_url: String,
}

impl AppState {
    /// Create a new application state with the given service clients.
    pub fn new(
        repository: Arc<dyn FullRepository>,
        identity: Arc<dyn IdentityProvider>,
        image_base_url: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            identity,
            image_base_url: image_base_url.into(),
        }
    }
}
