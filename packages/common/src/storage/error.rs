use thiserror::Error;

/// Errors from the object-storage gateway.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The configured credentials could not be constructed.
    #[error("object store credentials error: {0}")]
    Credentials(String),

    /// The storage backend rejected or failed the request.
    #[error("object store request failed: {0}")]
    Backend(String),

    /// The supplied content type is not a valid header value.
    #[error("invalid content type: {0:?}")]
    InvalidContentType(String),
}
