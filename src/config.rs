//! Server configuration and environment variable handling.

use std::env;

/// Default base URL of the host serving place images.
///
/// Image URLs are synthesized from this prefix and the place key; the
/// backend never checks that the referenced file exists.
pub const DEFAULT_IMAGE_BASE_URL: &str = "http://34.101.153.83:3000";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Base URL (host/port) of the external image host
    pub image_base_url: String,
}

impl ServerConfig {
    /// Create a new server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): Interface to bind
    /// - `PORT` (optional, default: 3000): Port to listen on
    /// - `IMAGE_BASE_URL` (optional): Base URL of the image host,
    ///   defaults to the fixed production host
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number".to_string())?;
        let image_base_url = env::var("IMAGE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_IMAGE_BASE_URL.to_string());

        Ok(Self {
            host,
            port,
            image_base_url,
        })
    }
}
