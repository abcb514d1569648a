use crate::{
    error,
    recommend::Recommender,
    server::{AppState, start_api_server},
};

/// Starts the HTTP server and blocks until it shuts down.
pub async fn serve() {
    let recommender = match Recommender::from_config().await {
        Ok(r) => r,
        Err(e) => error!("Cannot set up recommendations. Err: {}", e),
    };

    if let Err(e) = start_api_server(AppState::new(recommender)).await {
        error!("Server failed. Err: {}", e);
    }
}
