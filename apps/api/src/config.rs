use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables. Every
/// variable has a default; the service starts with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Path of the JSON preference store. Absent means in-memory only.
    pub store_path: Option<PathBuf>,
    /// Seed for the match ranker; same seed, same listing.
    pub match_seed: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            store_path: std::env::var("STORE_PATH").ok().map(PathBuf::from),
            match_seed: std::env::var("MATCH_SEED")
                .unwrap_or_else(|_| "0".to_string())
                .parse::<u64>()
                .context("MATCH_SEED must be an unsigned integer")?,
        })
    }
}
