use crate::dtos::DocumentPayload;
use crate::error::AppError;
use crate::models::NewDocument;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

pub async fn list_documents(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let documents = state.documents.list().await?;

    Ok(Json(documents))
}

pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let document = state
        .documents
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Document {} not found", id)))?;

    Ok(Json(document))
}

pub async fn create_document(
    State(state): State<AppState>,
    Json(payload): Json<DocumentPayload>,
) -> Result<impl IntoResponse, AppError> {
    // Any client-supplied id is ignored; the store assigns one.
    let input = NewDocument::try_from(payload)?;
    let document = state.documents.create(&input).await?;

    let location = format!("/documents/{}", document.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(document),
    ))
}

pub async fn update_document(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<DocumentPayload>,
) -> Result<impl IntoResponse, AppError> {
    if payload.id != Some(id) {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Body id {:?} does not match path id {}",
            payload.id,
            id
        )));
    }

    let input = NewDocument::try_from(payload)?;
    let document = state
        .documents
        .update(id, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Document {} not found", id)))?;

    Ok(Json(document))
}

pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.documents.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
