use crate::error::AppError;
use crate::models::NewDocument;
use serde::Deserialize;

/// Incoming JSON body for create and update. Every field is optional at the
/// deserialization layer so that a missing required field surfaces as a 400
/// from validation rather than a deserializer rejection.
#[derive(Debug, Deserialize)]
pub struct DocumentPayload {
    #[serde(alias = "Id")]
    pub id: Option<i32>,
    #[serde(alias = "Title")]
    pub title: Option<String>,
    #[serde(alias = "Content")]
    pub content: Option<String>,
    #[serde(alias = "Status")]
    pub status: Option<String>,
    #[serde(alias = "Author")]
    pub author: Option<String>,
}

impl TryFrom<DocumentPayload> for NewDocument {
    type Error = AppError;

    fn try_from(payload: DocumentPayload) -> Result<Self, Self::Error> {
        let title = payload
            .title
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("The title field is required")))?;
        let author = payload
            .author
            .filter(|a| !a.is_empty())
            .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("The author field is required")))?;

        Ok(NewDocument {
            title,
            content: payload.content,
            status: payload.status,
            author,
        })
    }
}
