//! Axum route handlers for image analysis.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::characteristics::handlers::require_user_id;
use crate::characteristics::store::{Characteristics, SaveOutcome};
use crate::errors::AppError;
use crate::llm_client::AssistantMessage;
use crate::state::AppState;
use crate::vision::analyzer::{analyze_image, extract_characteristics, DEFAULT_IMAGE_MIME};

/// Multipart field carrying the photo.
const IMAGE_FIELD: &str = "image";

#[derive(Debug, Deserialize)]
pub struct AnalyzeImageRequest {
    pub image_base64: String,
    pub mime_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PhotoAnalysisResponse {
    pub user_id: String,
    pub outcome: SaveOutcome,
    pub characteristics: Characteristics,
    pub analysis: AssistantMessage,
}

/// POST /api/v1/images/analyze
///
/// Runs the vision model on an already-encoded image and returns its raw message.
pub async fn handle_analyze_image(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeImageRequest>,
) -> Result<Json<AssistantMessage>, AppError> {
    let image = request.image_base64.trim();
    if image.is_empty() {
        return Err(AppError::Validation(
            "image_base64 cannot be empty".to_string(),
        ));
    }
    if STANDARD.decode(image).is_err() {
        return Err(AppError::Validation(
            "image_base64 is not valid base64".to_string(),
        ));
    }

    let mime_type = request.mime_type.as_deref().unwrap_or(DEFAULT_IMAGE_MIME);
    let message = analyze_image(state.llm.as_ref(), image, mime_type).await?;
    Ok(Json(message))
}

/// POST /api/v1/users/:user_id/photo
///
/// Multipart upload: analyze the `image` field, then store the extracted
/// characteristics for the user (overwriting any previous ones).
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<PhotoAnalysisResponse>, AppError> {
    require_user_id(&user_id)?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(IMAGE_FIELD) {
            let mime_type = field
                .content_type()
                .filter(|ct| ct.starts_with("image/"))
                .unwrap_or(DEFAULT_IMAGE_MIME)
                .to_string();
            let bytes = field.bytes().await?;
            upload = Some((mime_type, bytes));
            break;
        }
    }

    let (mime_type, bytes) = upload.ok_or_else(|| {
        AppError::Validation(format!("multipart field '{IMAGE_FIELD}' is required"))
    })?;
    if bytes.is_empty() {
        return Err(AppError::Validation("uploaded image is empty".to_string()));
    }
    info!(
        "Analyzing {} byte {mime_type} photo for user {user_id}",
        bytes.len()
    );

    let encoded = STANDARD.encode(&bytes);
    let analysis = analyze_image(state.llm.as_ref(), &encoded, &mime_type).await?;
    let characteristics = extract_characteristics(&analysis)?;
    let outcome = state.store.save(&user_id, &characteristics).await?;

    Ok(Json(PhotoAnalysisResponse {
        user_id,
        outcome,
        characteristics,
        analysis,
    }))
}
