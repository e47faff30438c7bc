use std::sync::Arc;

use crate::catalog::Catalog;
use crate::matching::ranking::MatchRanker;
use crate::store::prefs::Preferences;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable seed data; built once at startup.
    pub catalog: Arc<Catalog>,
    /// Typed layer over the preference store (favorites, searches, uploads).
    pub prefs: Preferences,
    /// Pluggable match ranker. Default: SeededRanker, seeded via MATCH_SEED.
    pub ranker: Arc<dyn MatchRanker>,
}
