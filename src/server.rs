use std::{net::SocketAddr, str::FromStr};

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{Error, Result, api, config, recommend::Recommender};

/// State shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        Self { recommender }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(
            "/api/books/recommendations/{song_id}",
            get(api::get_recommendations),
        )
        .route("/api/genres/mapping", get(api::get_mapping))
        .route("/songs", get(api::list_songs))
        .route("/songs/{song_id}", get(api::get_song))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_api_server(state: AppState) -> Result<()> {
    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| Error::Config(format!("failed to parse server address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("songshelf listening on http://{}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
