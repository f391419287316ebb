//! Document service - thin orchestration over the database gateway.

use crate::error::AppError;
use crate::models::{Document, NewDocument};
use crate::services::Database;
use std::sync::Arc;

/// Pass-through service between the HTTP handlers and the gateway. Each
/// operation mirrors a gateway call 1:1; no caching, no batching.
#[derive(Clone)]
pub struct DocumentService {
    db: Arc<Database>,
}

impl DocumentService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        self.db.list_documents().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Document>, AppError> {
        self.db.get_document(id).await
    }

    pub async fn create(&self, input: &NewDocument) -> Result<Document, AppError> {
        self.db.insert_document(input).await
    }

    pub async fn update(&self, id: i32, input: &NewDocument) -> Result<Option<Document>, AppError> {
        self.db.update_document(id, input).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.db.delete_document(id).await
    }
}
