/**
 * Question Handlers
 *
 * CRUD over the question collection. Each handler is a single store
 * query or a check-then-write pair; there is no cross-handler state.
 *
 * # Lifecycle
 *
 * A question is either unresolved or resolved, and only an explicit
 * `PATCH` with a `resolved` field moves it between the two. Nothing else
 * (reply count included) changes the flag.
 */

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::entities::Question;
use crate::error::ApiError;
use crate::handlers::types::{
    required, CreateQuestionRequest, MessageResponse, QuestionResponse, UpdateQuestionRequest,
};
use crate::store::{Document, Store};

/// Handle `GET /questions`.
///
/// Returns every question in the store's natural (insertion) order.
/// No pagination.
pub async fn list_questions(
    State(store): State<Store>,
) -> Result<Json<Vec<Document<Question>>>, ApiError> {
    let questions = store.questions().find_all().await?;
    Ok(Json(questions))
}

/// Handle `POST /questions`.
///
/// # Errors
///
/// * `400 Bad Request` - title or description absent or empty
/// * `500 Internal Server Error` - store failure
pub async fn create_question(
    State(store): State<Store>,
    Json(body): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<QuestionResponse>), ApiError> {
    let title = required(&body.title, "title")?;
    let description = required(&body.description, "description")?;

    let question = store
        .questions()
        .insert(Question::new(title, description))
        .await?;

    tracing::info!("question created: {}", question.id);
    Ok((
        StatusCode::CREATED,
        Json(QuestionResponse {
            message: "question created successfully".to_string(),
            question,
        }),
    ))
}

/// Handle `PATCH /questions/{id}`.
///
/// Applies `resolved` and `upvotes` independently, each only when present
/// in the body. The record is re-read once before the write; concurrent
/// updates to the same question race, last write wins.
///
/// # Errors
///
/// * `404 Not Found` - id does not resolve to a question
/// * `500 Internal Server Error` - store failure
pub async fn update_question(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(body): Json<UpdateQuestionRequest>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let questions = store.questions();
    let existing = questions
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("question not found"))?;

    let mut doc = existing.doc;
    if let Some(resolved) = body.resolved {
        doc.resolved = resolved;
    }
    if let Some(upvotes) = body.upvotes {
        doc.upvotes = upvotes;
    }

    let question = questions
        .replace(&id, doc)
        .await?
        .ok_or_else(|| ApiError::not_found("question not found"))?;

    tracing::info!("question updated: {id}");
    Ok(Json(QuestionResponse {
        message: "question updated successfully".to_string(),
        question,
    }))
}

/// Handle `DELETE /questions/{id}`.
///
/// Removes the question only. Its replies stay behind with a dangling
/// reference; there is no cascade.
///
/// # Errors
///
/// * `404 Not Found` - id does not resolve to a question
/// * `500 Internal Server Error` - store failure
pub async fn delete_question(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !store.questions().delete(&id).await? {
        return Err(ApiError::not_found("question not found"));
    }

    tracing::info!("question deleted: {id}");
    Ok(Json(MessageResponse {
        message: "question deleted successfully".to_string(),
    }))
}
