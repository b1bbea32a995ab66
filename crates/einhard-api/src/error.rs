//! Error types for the dataset API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use einhard_dataset::DatasetError;

/// Errors that can occur while serving a dataset request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body is not JSON or lacks required fields.
    #[error("{0}")]
    MalformedRequest(#[from] serde_json::Error),

    /// The definition was rejected by dataset validation.
    #[error("{0}")]
    Dataset(#[from] DatasetError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "message": self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
