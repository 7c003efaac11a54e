mod analysis;
mod catalog;
mod config;
mod errors;
mod render;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::SkillGapAnalyzer;
use crate::catalog::SkillCatalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillGap API v{}", env!("CARGO_PKG_VERSION"));

    // Skill tables: substitute file if configured, built-in otherwise
    let catalog = match &config.skill_catalog_path {
        Some(path) => SkillCatalog::from_path(path)
            .with_context(|| format!("Failed to load skill catalog from {}", path.display()))?,
        None => {
            info!("Using built-in skill catalog");
            SkillCatalog::builtin()
        }
    };

    let analyzer = SkillGapAnalyzer::new(Arc::new(catalog), config.match_mode)?;
    info!(
        "Skill gap analyzer ready (match mode: {}, roles: {})",
        analyzer.mode(),
        analyzer.catalog().roles.len()
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        analyzer: Arc::new(analyzer),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
