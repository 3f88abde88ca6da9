/**
 * Reply Handlers
 *
 * Adding a reply to a question and listing a question's replies.
 *
 * The two routes treat a missing question differently on purpose:
 * `add_reply` refuses with 404, while `list_replies` returns an empty
 * array with 200. That asymmetry is part of the contract.
 */

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::entities::Reply;
use crate::error::ApiError;
use crate::handlers::types::{required, AddReplyRequest, ReplyResponse};
use crate::store::{Document, Store};

/// Handle `POST /questions/{id}/replies`.
///
/// The question must exist at call time; nothing guarantees it keeps
/// existing afterwards.
///
/// # Errors
///
/// * `404 Not Found` - the question id does not resolve
/// * `400 Bad Request` - content absent or empty
/// * `500 Internal Server Error` - store failure
pub async fn add_reply(
    State(store): State<Store>,
    Path(question_id): Path<String>,
    Json(body): Json<AddReplyRequest>,
) -> Result<(StatusCode, Json<ReplyResponse>), ApiError> {
    store
        .questions()
        .find_by_id(&question_id)
        .await?
        .ok_or_else(|| ApiError::not_found("question not found"))?;

    let content = required(&body.content, "content")?;

    let reply = store
        .replies()
        .insert(Reply {
            content,
            question_id: question_id.clone(),
        })
        .await?;

    tracing::info!("reply added to question {question_id}: {}", reply.id);
    Ok((
        StatusCode::CREATED,
        Json(ReplyResponse {
            message: "reply added successfully".to_string(),
            reply,
        }),
    ))
}

/// Handle `GET /questions/{id}/replies`.
///
/// Returns the question's replies in insertion order. A question with no
/// replies, or one that does not exist at all, yields an empty array and
/// 200, never an error.
pub async fn list_replies(
    State(store): State<Store>,
    Path(question_id): Path<String>,
) -> Result<Json<Vec<Document<Reply>>>, ApiError> {
    let replies = store
        .replies()
        .find_by_field("questionId", &question_id)
        .await?;
    Ok(Json(replies))
}
