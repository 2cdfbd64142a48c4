//! API error types and HTTP rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use postbox_store::StoreError;

use crate::validate::ValidationError;

/// Errors a request handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The submission failed a validation rule.  The display text of the
    /// rule is returned to the client verbatim.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The store rejected an operation.  Details are logged server-side;
    /// the client only ever sees "storage failed".
    #[error("storage failed")]
    Storage(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "Submission store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "storage failed".to_string())
            }
        };

        let body = serde_json::json!({
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
