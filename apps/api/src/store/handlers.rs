use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::search::SearchFilters;
use crate::state::AppState;
use crate::store::prefs::SavedFilter;

/// GET /api/v1/preferences/favorites
pub async fn handle_list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.prefs.favorites()?))
}

#[derive(Serialize)]
pub struct FavoriteToggleResponse {
    pub id: String,
    pub favorited: bool,
}

/// POST /api/v1/preferences/favorites/:id
pub async fn handle_toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FavoriteToggleResponse>, AppError> {
    let favorited = state.prefs.toggle_favorite(&id)?;
    Ok(Json(FavoriteToggleResponse { id, favorited }))
}

/// GET /api/v1/preferences/applied
pub async fn handle_list_applied(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.prefs.applied()?))
}

#[derive(Serialize)]
pub struct MarkAppliedResponse {
    pub id: String,
    pub already_applied: bool,
}

/// POST /api/v1/preferences/applied/:id
pub async fn handle_mark_applied(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MarkAppliedResponse>, AppError> {
    let newly_applied = state.prefs.mark_applied(&id)?;
    Ok(Json(MarkAppliedResponse {
        id,
        already_applied: !newly_applied,
    }))
}

/// GET /api/v1/preferences/filters
pub async fn handle_list_saved_filters(
    State(state): State<AppState>,
) -> Result<Json<Vec<SavedFilter>>, AppError> {
    Ok(Json(state.prefs.saved_filters()?))
}

/// POST /api/v1/preferences/filters
pub async fn handle_save_filter(
    State(state): State<AppState>,
    Json(filters): Json<SearchFilters>,
) -> Result<(StatusCode, Json<SavedFilter>), AppError> {
    if filters.is_empty() {
        return Err(AppError::Validation(
            "cannot save an empty filter".to_string(),
        ));
    }
    let saved = state.prefs.save_filter(filters)?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /api/v1/preferences/filters/:index
pub async fn handle_delete_filter(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<StatusCode, AppError> {
    state.prefs.delete_filter(index)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/preferences/searches
pub async fn handle_list_searches(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.prefs.recent_searches()?))
}

#[derive(Deserialize)]
pub struct RecordSearchRequest {
    pub term: String,
}

/// POST /api/v1/preferences/searches
pub async fn handle_record_search(
    State(state): State<AppState>,
    Json(req): Json<RecordSearchRequest>,
) -> Result<StatusCode, AppError> {
    if req.term.trim().is_empty() {
        return Err(AppError::Validation("search term is empty".to_string()));
    }
    state.prefs.record_search(&req.term)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/preferences/searches
pub async fn handle_clear_searches(
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.prefs.clear_searches()?;
    Ok(StatusCode::NO_CONTENT)
}
