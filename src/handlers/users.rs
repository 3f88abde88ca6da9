/**
 * User Handlers
 *
 * Signup (POST /signup) and login (POST /login). Login returns the user
 * record, not a credential: there is no session or token persistence.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage; the plaintext is
 *   never persisted.
 * - Both login failure cases (unknown email, wrong password) return the
 *   identical generic message, so the response does not reveal which
 *   part was wrong.
 * - The login payload carries the stored record including the bcrypt
 *   digest. Known gap, kept to match the documented contract.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::credentials;
use crate::entities::User;
use crate::error::ApiError;
use crate::handlers::types::{required, LoginRequest, LoginResponse, MessageResponse, SignupRequest};
use crate::store::Store;

/// The one message for every login failure.
const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Handle `POST /signup`.
///
/// # Errors
///
/// * `400 Bad Request` - a required field is absent or empty, or the
///   email is already registered
/// * `500 Internal Server Error` - store or hash failure
pub async fn signup(
    State(store): State<Store>,
    Json(body): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let first_name = required(&body.first_name, "firstName")?;
    let last_name = required(&body.last_name, "lastName")?;
    let email = required(&body.email, "email")?;
    let password = required(&body.password, "password")?;

    let users = store.users();
    if !users.find_by_field("email", &email).await?.is_empty() {
        tracing::warn!("signup rejected, email already registered: {email}");
        return Err(ApiError::conflict("email is already registered"));
    }

    let digest = credentials::hash(&password)?;
    users
        .insert(User {
            first_name,
            last_name,
            email: email.clone(),
            password: digest,
        })
        .await?;

    tracing::info!("user registered: {email}");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "user registered successfully".to_string(),
        }),
    ))
}

/// Handle `POST /login`.
///
/// Succeeds iff the email resolves to a user and the password verifies
/// against the stored digest.
///
/// # Errors
///
/// * `400 Bad Request` - missing field, unknown email or wrong password
///   (the latter two share one message)
/// * `500 Internal Server Error` - store failure or malformed digest
pub async fn login(
    State(store): State<Store>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = required(&body.email, "email")?;
    let password = required(&body.password, "password")?;

    let user = store
        .users()
        .find_by_field("email", &email)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::auth(INVALID_CREDENTIALS))?;

    if !credentials::verify(&password, &user.doc.password)? {
        return Err(ApiError::auth(INVALID_CREDENTIALS));
    }

    tracing::info!("user logged in: {email}");
    Ok(Json(LoginResponse {
        message: "login successful".to_string(),
        user,
    }))
}
