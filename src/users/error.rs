//! HTTP-facing errors for the user endpoints.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::users::model::UserId;

/// Errors surfaced by the user handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Create or update payload without a name.
    #[error("Name is required.")]
    NameRequired,

    /// No record under the requested id.
    #[error("User {0} not found")]
    NotFound(UserId),

    /// Body was not a valid JSON user payload.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Path segment was not a valid user id.
    #[error("Invalid user id: {0}")]
    InvalidId(#[from] PathRejection),
}

impl ApiError {
    /// Status code sent to the client.
    ///
    /// Extractor rejections keep the status axum assigns them (400 for
    /// syntax errors, 415 for a missing JSON content type, 422 for
    /// mistyped fields, 413 for oversized bodies).
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NameRequired => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::InvalidId(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
