//! Journey HTTP Server Binary
//!
//! This is the main entry point for the Journey REST API server.
//! It constructs the document store and identity provider clients, sets up
//! the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with in-memory backends (default)
//! cargo run --bin journey-server --features "local-store,http-server"
//!
//! # Run against Firebase/Firestore
//! FIREBASE_API_KEY=... FIRESTORE_PROJECT_ID=... \
//!   cargo run --bin journey-server --no-default-features \
//!   --features "remote-store,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `IMAGE_BASE_URL`: Base URL of the external image host
//! - `FIREBASE_API_KEY`: Identity toolkit API key (remote-store)
//! - `FIRESTORE_PROJECT_ID`: Google Cloud project id (remote-store)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use journey_backend::auth::IdentityProvider;
use journey_backend::config::ServerConfig;
use journey_backend::db::repository::FullRepository;
use journey_backend::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Journey HTTP Server");

    let config = ServerConfig::from_env().map_err(anyhow::Error::msg)?;

    // Construct the external service clients once and inject them into the
    // router state.
    let (repository, identity) = build_clients()?;
    info!("Service clients initialized");

    let state = AppState::new(repository, identity, config.image_base_url.clone());
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// Backend selection is a compile-time feature choice; remote-store takes
// precedence when both are enabled.
#[cfg(feature = "remote-store")]
fn build_clients() -> anyhow::Result<(Arc<dyn FullRepository>, Arc<dyn IdentityProvider>)> {
    use journey_backend::auth::FirebaseAuthClient;
    use journey_backend::db::FirestoreRepository;

    let repository = FirestoreRepository::from_env().map_err(anyhow::Error::msg)?;
    let identity = FirebaseAuthClient::from_env().map_err(anyhow::Error::msg)?;
    Ok((Arc::new(repository), Arc::new(identity)))
}

#[cfg(all(feature = "local-store", not(feature = "remote-store")))]
fn build_clients() -> anyhow::Result<(Arc<dyn FullRepository>, Arc<dyn IdentityProvider>)> {
    use journey_backend::auth::LocalIdentityProvider;
    use journey_backend::db::LocalRepository;

    info!("Using in-memory backends; data will not survive a restart");
    Ok((
        Arc::new(LocalRepository::new()),
        Arc::new(LocalIdentityProvider::new()),
    ))
}
