mod config;
mod db;
mod errors;
mod generation;
mod models;
mod posts;
mod providers;
mod routes;
mod seo;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::providers::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Fluently CMS API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // One OpenAI client serves both capabilities: chat completions for text,
    // the images API for featured images.
    let openai = Arc::new(OpenAiClient::new(config.openai_api_key.clone()));
    info!(
        "Generation providers initialized (text: {}, image: {})",
        providers::TEXT_MODEL,
        providers::IMAGE_MODEL
    );

    let state = AppState {
        db,
        text_gen: openai.clone(),
        image_gen: openai,
        config: config.clone(),
    };

    // CORS stays permissive: the admin panel and the public blog are served
    // from a different origin than this API.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
