use axum::http::StatusCode;
use thiserror::Error;

use crate::constants::{ERR_INVALID_CREDENTIALS, ERR_STORAGE};

/// Failures raised by the account and expense stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{}", ERR_INVALID_CREDENTIALS)]
    AuthFailure,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            StoreError::AlreadyExists(_) => StatusCode::CONFLICT,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::AuthFailure => StatusCode::UNAUTHORIZED,
            StoreError::Io(_) | StoreError::Serde(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_storage_failure(&self) -> bool {
        matches!(self, StoreError::Io(_) | StoreError::Serde(_))
    }
}

/// Converts a store error into the `(status, message)` pair handlers return.
/// Storage failures are logged and reported with a generic message.
pub fn store_error(err: StoreError) -> (StatusCode, String) {
    if err.is_storage_failure() {
        tracing::error!(error = %err, "storage failure");
        return (StatusCode::INTERNAL_SERVER_ERROR, ERR_STORAGE.to_string());
    }
    (err.status(), err.to_string())
}
