pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::catalog;
use crate::chat;
use crate::intake;
use crate::intake::uploads::UPLOAD_MAX_BYTES;
use crate::matching;
use crate::state::AppState;
use crate::store;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // University matching
        .route(
            "/api/v1/universities",
            get(matching::handlers::handle_list_universities),
        )
        .route(
            "/api/v1/universities/recommendations",
            post(matching::handlers::handle_recommendations),
        )
        .route(
            "/api/v1/universities/streams/:stream/interests",
            get(matching::handlers::handle_stream_interests),
        )
        // Opportunity search
        .route(
            "/api/v1/opportunities",
            get(matching::handlers::handle_list_opportunities),
        )
        .route(
            "/api/v1/opportunities/skills",
            get(matching::handlers::handle_list_skills),
        )
        // Document intake
        .route(
            "/api/v1/marksheet",
            post(intake::handlers::handle_process_marksheet),
        )
        .route(
            "/api/v1/uploads",
            post(intake::handlers::handle_upload).get(intake::handlers::handle_list_uploads),
        )
        .route(
            "/api/v1/uploads/:filename/ats-report",
            get(intake::handlers::handle_ats_report),
        )
        // Preferences
        .route(
            "/api/v1/preferences/favorites",
            get(store::handlers::handle_list_favorites),
        )
        .route(
            "/api/v1/preferences/favorites/:id",
            post(store::handlers::handle_toggle_favorite),
        )
        .route(
            "/api/v1/preferences/applied",
            get(store::handlers::handle_list_applied),
        )
        .route(
            "/api/v1/preferences/applied/:id",
            post(store::handlers::handle_mark_applied),
        )
        .route(
            "/api/v1/preferences/filters",
            get(store::handlers::handle_list_saved_filters)
                .post(store::handlers::handle_save_filter),
        )
        .route(
            "/api/v1/preferences/filters/:index",
            delete(store::handlers::handle_delete_filter),
        )
        .route(
            "/api/v1/preferences/searches",
            get(store::handlers::handle_list_searches)
                .post(store::handlers::handle_record_search)
                .delete(store::handlers::handle_clear_searches),
        )
        // Profiles
        .route("/api/v1/users/:id", get(catalog::handlers::handle_get_user))
        // Assistant
        .route(
            "/api/v1/chat",
            get(chat::handlers::handle_greeting).post(chat::handlers::handle_chat),
        )
        // axum's default body limit is 2 MB; the upload ceiling is 10 MB
        // plus multipart framing. Oversized files must reach validation.
        .layer(DefaultBodyLimit::max(UPLOAD_MAX_BYTES + 1024 * 1024))
        .with_state(state)
}
