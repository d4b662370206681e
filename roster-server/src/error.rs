//! Handler error types and their response mapping.
//!
//! Every failure a handler can surface is one [`ApiError`] variant, and each
//! variant maps to exactly one response status. Bodies carry the error's
//! textual description as plain text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use roster_core::error::StoreError;

/// Errors surfaced by the employee handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The path identifier is not a valid object id in hex form.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
    /// The request body could not be decoded into an employee.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// An update addressed an identifier with no matching document.
    /// Reported as a client error, in contrast to deletes.
    #[error("No employee with identifier {0}")]
    UnknownId(String),
    /// A delete addressed an identifier with no matching document.
    #[error("No matching employee")]
    NotFound,
    /// A freshly inserted document could not be read back.
    #[error("Created employee {0} could not be read back")]
    ReadBackFailed(String),
    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// The response status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) | ApiError::InvalidBody(_) | ApiError::UnknownId(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::ReadBackFailed(_) | ApiError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
