mod config;
mod errors;
mod layout;
mod models;
mod pdf;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::default_page_geometry;
use crate::pdf::PdfWorkerClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cvpress API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PDF worker client
    let pdf = PdfWorkerClient::new(&config.pdf_worker_url, config.pdf_worker_timeout)?;
    info!(
        endpoint = pdf.endpoint(),
        timeout_secs = config.pdf_worker_timeout.as_secs(),
        "PDF worker client initialized"
    );

    // Fixed A4 geometry for every layout pass
    let page_geometry = default_page_geometry();
    info!(
        "Page geometry: {}x{}px, usable height {}px",
        page_geometry.page_width_px, page_geometry.page_height_px, page_geometry.usable_height_px
    );

    let state = AppState {
        config: config.clone(),
        pdf: Arc::new(pdf),
        page_geometry,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
