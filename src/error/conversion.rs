/**
 * Error Conversion
 *
 * `IntoResponse` for the API error taxonomy. Every failure becomes a
 * JSON body of the form:
 *
 * ```json
 * { "message": "question not found" }
 * ```
 *
 * with the status code taken from the error kind.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self.message());
        } else {
            tracing::warn!("request rejected ({}): {}", status, self.message());
        }
        let body = Json(serde_json::json!({ "message": self.message() }));
        (status, body).into_response()
    }
}
