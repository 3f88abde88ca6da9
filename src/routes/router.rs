/**
 * Router Configuration
 *
 * Builds the single Axum router for the application.
 *
 * # Routes
 *
 * ## API
 *
 * - `GET  /questions` - list all questions
 * - `POST /questions` - create a question
 * - `PATCH  /questions/{id}` - partial update (resolved, upvotes)
 * - `DELETE /questions/{id}` - delete a question
 * - `POST /questions/{id}/replies` - add a reply
 * - `GET  /questions/{id}/replies` - list a question's replies
 * - `POST /signup` - register a user
 * - `POST /login` - authenticate a user
 *
 * ## Pages
 *
 * `GET /`, `/ask`, `/signup`, `/login` serve rendered page stubs; the
 * signup and login paths carry the page on GET and the API operation on
 * POST.
 *
 * ## Static files
 *
 * Static assets are served from the `public` directory under `/static`.
 * Unknown routes fall back to a plain 404.
 */

use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::services::ServeDir;

use crate::handlers::{pages, questions, replies, users};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route(
            "/questions/{id}",
            patch(questions::update_question).delete(questions::delete_question),
        )
        .route(
            "/questions/{id}/replies",
            post(replies::add_reply).get(replies::list_replies),
        )
        .route("/signup", get(pages::signup).post(users::signup))
        .route("/login", get(pages::login).post(users::login))
        .route("/", get(pages::home))
        .route("/ask", get(pages::ask))
        .nest_service("/static", ServeDir::new("public"))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}
