/**
 * Request and Response Schemas
 *
 * Explicit schema structs for every request body, validated at the
 * boundary before any handler logic runs. Required fields are modeled as
 * `Option<String>` so that an absent field deserializes cleanly and is
 * rejected by `required` with a ValidationError, instead of bubbling a
 * deserializer message to the client.
 */

use serde::{Deserialize, Serialize};

use crate::entities::{Question, Reply, User};
use crate::error::ApiError;
use crate::store::Document;

/// Extract a required field, rejecting absent or blank values.
pub(crate) fn required(value: &Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(ApiError::validation(format!("{field} is required"))),
    }
}

/// Body of `POST /signup`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /login`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /questions`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Body of `PATCH /questions/{id}`.
///
/// Each field is applied only when present; absence leaves the stored
/// value untouched, it never resets to the default.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionRequest {
    pub resolved: Option<bool>,
    pub upvotes: Option<i64>,
}

/// Body of `POST /questions/{id}/replies`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReplyRequest {
    pub content: Option<String>,
}

/// Bare confirmation payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Payload carrying a question alongside the confirmation.
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub message: String,
    pub question: Document<Question>,
}

/// Payload carrying a reply alongside the confirmation.
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub message: String,
    pub reply: Document<Reply>,
}

/// Payload of a successful login.
///
/// Carries the stored user record as-is, hashed password included.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: Document<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_accepts_present_value() {
        let value = Some("hello".to_string());
        assert_eq!(required(&value, "content").unwrap(), "hello");
    }

    #[test]
    fn test_required_rejects_absent_and_blank() {
        assert!(required(&None, "content").is_err());
        assert!(required(&Some(String::new()), "content").is_err());
        assert!(required(&Some("   ".to_string()), "content").is_err());
    }

    #[test]
    fn test_update_request_fields_independent() {
        let body: UpdateQuestionRequest =
            serde_json::from_str(r#"{"resolved": true}"#).unwrap();
        assert_eq!(body.resolved, Some(true));
        assert_eq!(body.upvotes, None);
    }
}
