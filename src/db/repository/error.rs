//! Error types for document store operations.

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
///
/// Record absence is not an error at this layer: key lookups return
/// `Ok(None)` and the caller decides whether that is a 404. There is no
/// retry policy anywhere; transient backend failures surface immediately.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store could not be reached.
    #[error("connection error: {0}")]
    Connection(String),

    /// The store rejected or failed the request.
    #[error("backend error: {0}")]
    Backend(String),

    /// Conditional create failed because the key is already taken.
    #[error("record already exists: {0}")]
    AlreadyExists(String),

    /// A stored document is missing required fields or has the wrong shape.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// Configuration or initialization error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl RepositoryError {
    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Create an already-exists error for a conditional create.
    pub fn already_exists(key: impl Into<String>) -> Self {
        Self::AlreadyExists(key.into())
    }

    /// Create an invalid-record error.
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
