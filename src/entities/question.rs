use serde::{Deserialize, Serialize};

/// A forum question.
///
/// `resolved` and `upvotes` are settable independently through partial
/// update. Upvotes accept any integer, negative included; nothing clamps
/// the count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Question title
    pub title: String,
    /// Question body
    pub description: String,
    /// Whether the question has been marked resolved
    #[serde(default)]
    pub resolved: bool,
    /// Vote count
    #[serde(default)]
    pub upvotes: i64,
}

impl Question {
    /// A fresh question: unresolved, zero upvotes.
    pub fn new(title: String, description: String) -> Self {
        Self {
            title,
            description,
            resolved: false,
            upvotes: 0,
        }
    }
}
