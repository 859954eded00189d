use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;
use gig_search::config::Config;
use gig_search::gigs::engine::GigSearch;
use gig_search::gigs::handlers::{ENDPOINT_GIGS, router};
use gig_search::gigs::shape::RestShape;
use gig_search::storage::memory::MemoryStore;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Storage layer:
    let store = match &config.seed_file {
        Some(path) => {
            tracing::info!("Loading seed data from {}", path.display());
            MemoryStore::from_seed_file(path)?
        }
        None => {
            tracing::warn!("No seed file configured, starting with an empty store");
            MemoryStore::new()
        }
    };
    let store = Arc::new(store);

    // 2. Search service:
    let search = Arc::new(GigSearch::new(
        store.clone(),
        store.clone(),
        Arc::new(RestShape::new(&config.site_url)),
    ));

    // 3. HTTP Router:
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(router(search))
        .layer(TraceLayer::new_for_http());

    // 4. Start HTTP server:
    tracing::info!(
        "Serving {} gigs on http://{}{}",
        store.gig_count(),
        config.bind,
        ENDPOINT_GIGS
    );

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
