use axum::{extract::State, Json};

use crate::characteristics::handlers::require_user_id;
use crate::errors::AppError;
use crate::matching::matcher::{match_users, MatchRequest, MatchResult};
use crate::state::AppState;

/// POST /api/v1/matches
///
/// 404 when either user has no stored characteristics.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    require_user_id(&request.user1_id)?;
    require_user_id(&request.user2_id)?;

    let result = match_users(state.store.as_ref(), state.llm.as_ref(), &request).await?;
    Ok(Json(result))
}
