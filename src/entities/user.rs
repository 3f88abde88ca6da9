use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Created by signup, never mutated or deleted afterwards. Identity is
/// the email, which is unique across all users.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Email address (globally unique)
    pub email: String,
    /// bcrypt digest of the password, never the plaintext
    pub password: String,
}
