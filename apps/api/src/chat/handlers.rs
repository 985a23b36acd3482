use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::responder::respond;
use crate::documents::catalog::all_documents;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let documents = all_documents(&state.config.documents_base_url);
    let answer = respond(state.llm.as_ref(), &request.question, &documents).await?;
    Ok(Json(ChatResponse { answer }))
}
