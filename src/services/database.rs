//! Database gateway for document-api.

use crate::error::AppError;
use crate::models::{Document, NewDocument};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

/// Database connection pool wrapper. All document persistence flows through
/// here; one query per operation, no transaction boundaries beyond that.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool.
    #[instrument(skip(database_url), fields(service = "document-api"))]
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, AppError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Health check failed: {}", e)))?;

        Ok(())
    }

    /// Run database migrations.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    /// List all documents in insertion order.
    #[instrument(skip(self))]
    pub async fn list_documents(&self) -> Result<Vec<Document>, AppError> {
        let documents = sqlx::query_as::<_, Document>(
            r#"
            SELECT id, title, content, status, author
            FROM documents
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to list documents: {}", e)))?;

        Ok(documents)
    }

    /// Get a document by id. An absent id is not an error.
    #[instrument(skip(self), fields(document_id = %id))]
    pub async fn get_document(&self, id: i32) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            SELECT id, title, content, status, author
            FROM documents
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to get document: {}", e)))?;

        Ok(document)
    }

    /// Insert a new document and return it with its store-assigned id.
    #[instrument(skip(self, input))]
    pub async fn insert_document(&self, input: &NewDocument) -> Result<Document, AppError> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (title, content, status, author)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, status, author
            "#,
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.status)
        .bind(&input.author)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to insert document: {}", e)))?;

        info!(document_id = %document.id, "Document created");

        Ok(document)
    }

    /// Replace every field of an existing document. Optional fields absent
    /// from the input overwrite the stored values with NULL. Returns `None`
    /// when the id does not exist.
    #[instrument(skip(self, input), fields(document_id = %id))]
    pub async fn update_document(
        &self,
        id: i32,
        input: &NewDocument,
    ) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            UPDATE documents
            SET title = $2, content = $3, status = $4, author = $5
            WHERE id = $1
            RETURNING id, title, content, status, author
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.status)
        .bind(&input.author)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to update document: {}", e)))?;

        Ok(document)
    }

    /// Delete a document by id. Deleting a missing id is a no-op.
    #[instrument(skip(self), fields(document_id = %id))]
    pub async fn delete_document(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to delete document: {}", e)))?;

        if result.rows_affected() > 0 {
            info!(document_id = %id, "Document deleted");
        }

        Ok(())
    }
}
