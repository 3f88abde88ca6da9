use serde::{Deserialize, Serialize};

/// A reply to a question.
///
/// `question_id` is validated against an existing question when the reply
/// is created, and never afterwards: deleting a question does not cascade
/// to its replies, so the reference may dangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// Reply body
    pub content: String,
    /// Identifier of the question this reply belongs to
    pub question_id: String,
}
