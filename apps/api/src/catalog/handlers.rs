use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// GET /api/v1/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    state
        .catalog
        .user_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("no user with id '{id}'")))
}
