use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upstream completion service error: {0}")]
    UpstreamError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Object storage error: {0}")]
    ObjectStorageError(String),

    #[error("Identity provider error: {0}")]
    IdentityProviderError(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found")]
    NotFound,

    #[error("Payload too large, max size is {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Internal server error")]
    InternalServerError,
}
