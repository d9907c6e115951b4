mod advisor;
mod analysis;
mod catalog;
mod config;
mod documents;
mod engine;
mod errors;
mod extraction;
mod matching;
mod ranking;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::engine::MatchEngine;
use crate::extraction::SignalExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric variables)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerMatch API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::builtin();
    let engine = MatchEngine::new(catalog, SignalExtractor::new(config.reference_year));
    info!(
        careers = catalog.careers().len(),
        job_roles = catalog.roles().len(),
        reference_year = config.reference_year,
        "Match engine initialized"
    );

    let state = AppState::new(config.clone(), engine);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
