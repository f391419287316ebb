//! Document model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted document. `id` is assigned by the store on insert and never
/// changes afterwards. Null-valued optional fields are omitted from JSON
/// output; the PascalCase aliases accept the legacy property spelling on
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Document {
    #[serde(alias = "Id")]
    pub id: i32,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Content", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(alias = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(alias = "Author")]
    pub author: String,
}

/// Input for inserting or replacing a document. Title and author have
/// already been checked for presence; the id comes from the store (insert)
/// or the path (update).
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: String,
    pub content: Option<String>,
    pub status: Option<String>,
    pub author: String,
}
