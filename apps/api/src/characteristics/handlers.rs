use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::characteristics::store::{Characteristics, SaveOutcome};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CharacteristicsResponse {
    pub user_id: String,
    pub characteristics: Characteristics,
}

#[derive(Debug, Serialize)]
pub struct SaveCharacteristicsResponse {
    pub user_id: String,
    pub outcome: SaveOutcome,
}

pub(crate) fn require_user_id(user_id: &str) -> Result<(), AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }
    Ok(())
}

/// PUT /api/v1/users/:user_id/characteristics
pub async fn handle_save_characteristics(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(characteristics): Json<Characteristics>,
) -> Result<Json<SaveCharacteristicsResponse>, AppError> {
    require_user_id(&user_id)?;
    let outcome = state.store.save(&user_id, &characteristics).await?;
    Ok(Json(SaveCharacteristicsResponse { user_id, outcome }))
}

/// GET /api/v1/users/:user_id/characteristics
///
/// Unknown users get an empty object, not a 404.
pub async fn handle_get_characteristics(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<CharacteristicsResponse>, AppError> {
    require_user_id(&user_id)?;
    let characteristics = state.store.get(&user_id).await?;
    Ok(Json(CharacteristicsResponse {
        user_id,
        characteristics,
    }))
}
