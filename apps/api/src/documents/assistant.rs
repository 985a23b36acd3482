use serde_json::Value;
use tracing::{debug, error};

use crate::documents::prompts::FORM_ASSISTANT_SYSTEM;
use crate::errors::AppError;
use crate::llm_client::{AssistantMessage, ChatMessage, ChatModel, CHAT_MODEL};

/// Flattens extraction results into one context string, in order, space-separated.
/// String results contribute their raw text; anything else its compact JSON.
pub fn build_document_context(results: &[Value]) -> String {
    results
        .iter()
        .map(|result| match result {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Asks the text model for form-filling guidance based on extraction results.
/// Returns the model's message untouched.
pub async fn assist_with_form(
    llm: &dyn ChatModel,
    results: &[Value],
) -> Result<AssistantMessage, AppError> {
    let context = build_document_context(results);
    debug!(
        "Requesting form guidance for {} extraction result(s)",
        results.len()
    );

    let messages = [
        ChatMessage::system(FORM_ASSISTANT_SYSTEM),
        ChatMessage::user(context),
    ];

    llm.complete(CHAT_MODEL, &messages).await.map_err(|e| {
        error!("Error processing document: {e}");
        AppError::Llm(format!("Error processing document: {e}"))
    })
}
