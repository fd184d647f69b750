use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

/// Custom error type for API endpoints
///
/// Every variant maps to one HTTP status code. The `Display` text of a
/// variant is sent back verbatim as a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path id segment is not a non-negative integer
    #[error("Invalid item ID")]
    InvalidItemId(String),
    /// Request body is not item JSON
    #[error("Invalid request body")]
    InvalidBody(#[source] serde_json::Error),
    #[error("Item name cannot be empty")]
    EmptyName,
    #[error("Item value cannot be negative")]
    NegativeValue,
    /// Operation on an id that is not in the store
    #[error(transparent)]
    NotFound(#[from] StoreError),
    /// Route exists but not for this method
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidItemId(_)
            | ApiError::InvalidBody(_)
            | ApiError::EmptyName
            | ApiError::NegativeValue => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidItemId(raw) => {
                tracing::debug!("Rejected item id segment: {:?}", raw);
            }
            ApiError::InvalidBody(err) => {
                tracing::debug!("Rejected request body: {}", err);
            }
            _ => {}
        }

        (self.status(), self.to_string()).into_response()
    }
}
