use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::documents::assistant::assist_with_form;
use crate::documents::catalog::{all_documents, find_document, DocumentLink};
use crate::errors::AppError;
use crate::llm_client::AssistantMessage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssistRequest {
    pub results: Vec<Value>,
}

/// POST /api/v1/documents/assist
pub async fn handle_assist(
    State(state): State<AppState>,
    Json(request): Json<AssistRequest>,
) -> Result<Json<AssistantMessage>, AppError> {
    if request.results.is_empty() {
        return Err(AppError::Validation("results cannot be empty".to_string()));
    }
    let message = assist_with_form(state.llm.as_ref(), &request.results).await?;
    Ok(Json(message))
}

/// GET /api/v1/documents
pub async fn handle_list_documents(State(state): State<AppState>) -> Json<Vec<DocumentLink>> {
    Json(all_documents(&state.config.documents_base_url))
}

/// GET /api/v1/documents/:key
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DocumentLink>, AppError> {
    find_document(&state.config.documents_base_url, &key)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Document {key} not found")))
}
