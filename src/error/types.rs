/**
 * API Error Types
 *
 * The error taxonomy shared by all resource handlers. Store-layer and
 * credential-layer failures convert into this taxonomy via `From`
 * implementations; the handlers just use `?`.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::store::StoreError;

/// All failure kinds a handler can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or empty
    #[error("{0}")]
    Validation(String),

    /// A unique key (the user email) is already taken
    #[error("{0}")]
    Conflict(String),

    /// An identifier did not resolve to a record
    #[error("{0}")]
    NotFound(String),

    /// Bad credentials; the message never says which part was wrong
    #[error("{0}")]
    Auth(String),

    /// Store or hash failure; details stay in the log, not the response
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) | Self::Auth(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The human-readable message for the response body.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::Conflict(message)
            | Self::NotFound(message)
            | Self::Auth(message)
            | Self::Internal(message) => message,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        if err.is_unique_violation() {
            return Self::conflict("email is already registered");
        }
        tracing::error!("store failure: {err}");
        Self::internal("internal server error")
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("credential failure: {err:?}");
        Self::internal("internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("title is required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::conflict("email is already registered").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::auth("invalid email or password").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::not_found("question not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::internal("internal server error").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message() {
        let err = ApiError::not_found("question not found");
        assert_eq!(err.message(), "question not found");
    }

    #[test]
    fn test_malformed_digest_maps_to_internal() {
        let bcrypt_err = bcrypt::verify("pw", "garbage").unwrap_err();
        let err: ApiError = bcrypt_err.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
