mod catalog;
mod chat;
mod config;
mod errors;
mod intake;
mod matching;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::matching::ranking::{MatchRanker, SeededRanker};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::file::JsonFileStore;
use crate::store::prefs::Preferences;
use crate::store::{KvStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillBridge API v{}", env!("CARGO_PKG_VERSION"));

    // Preference store: file-backed when STORE_PATH is set, otherwise
    // process-local.
    let kv: Arc<dyn KvStore> = match &config.store_path {
        Some(path) => {
            info!("Preference store: {}", path.display());
            Arc::new(JsonFileStore::open(path)?)
        }
        None => {
            info!("Preference store: in-memory");
            Arc::new(MemoryStore::new())
        }
    };
    let prefs = Preferences::new(kv);

    // Seed catalogs
    let catalog = Arc::new(Catalog::seed());
    info!(
        "Catalog seeded: {} universities, {} opportunities, {} users",
        catalog.universities.len(),
        catalog.opportunities.len(),
        catalog.users.len()
    );

    // Match ranker (deterministic; MATCH_SEED fixes the listing order)
    let ranker: Arc<dyn MatchRanker> = Arc::new(SeededRanker::new(config.match_seed));
    info!("Match ranker seeded with {}", config.match_seed);

    // Build app state
    let state = AppState {
        catalog,
        prefs,
        ranker,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
