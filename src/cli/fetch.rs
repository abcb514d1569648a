use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tokio::time::sleep;

use super::recommend::render_recommendations;
use crate::{Error, Result, config, error, types::RecommendationsResponse};

/// Number of extra attempts after a 502/503 from the server.
const RETRIES: u32 = 1;

/// Fetches recommendations from a running server and prints them.
///
/// Talks to the same endpoint the web frontend uses, so it doubles as a smoke
/// test for a deployed instance.
pub async fn fetch(song_id: String, limit: Option<usize>) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching book recommendations...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = get_recommendations(&config::api_url(), &song_id, limit).await;
    pb.finish_and_clear();

    match result {
        Ok(response) => render_recommendations(&response),
        Err(e) => error!("Error loading recommendations: {}", e),
    }
}

/// Builds `{base_url}/api/books/recommendations/{song_id}[?max_results=N]`.
///
/// The song id is pushed as a single path segment, so characters such as
/// `/`, `?` and `#` are percent-encoded instead of changing the route.
pub fn recommendations_url(base_url: &str, song_id: &str, limit: Option<usize>) -> Result<Url> {
    let invalid = || Error::Config(format!("invalid API url: {}", base_url));

    let mut url = Url::parse(base_url).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(["api", "books", "recommendations", song_id]);

    if let Some(limit) = limit {
        url.query_pairs_mut()
            .append_pair("max_results", &limit.to_string());
    }
    Ok(url)
}

/// Calls `GET {base_url}/api/books/recommendations/{song_id}`.
///
/// Retries once after a short pause when the server answers 502 or 503.
/// Other non-success statuses are turned into the matching [`Error`] using
/// the `detail` field of the response body.
pub async fn get_recommendations(
    base_url: &str,
    song_id: &str,
    limit: Option<usize>,
) -> Result<RecommendationsResponse> {
    let api_url = recommendations_url(base_url, song_id, limit)?;

    let client = Client::new();
    let mut attempt = 0;

    loop {
        let response = client.get(api_url.clone()).send().await.map_err(|e| {
            Error::UpstreamUnavailable(format!("cannot reach {}: {}", base_url, e))
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<RecommendationsResponse>().await?);
        }

        if matches!(status, StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE)
            && attempt < RETRIES
        {
            attempt += 1;
            sleep(Duration::from_secs(2)).await;
            continue; // retry
        }

        let detail = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body["detail"].as_str().map(str::to_string))
            .unwrap_or_else(|| status.to_string());

        return Err(match status {
            StatusCode::NOT_FOUND => Error::NotFound(format!("Song {}", song_id)),
            StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => {
                Error::UpstreamUnavailable(detail)
            }
            StatusCode::BAD_REQUEST => Error::InvalidInput(detail),
            _ => Error::UpstreamUnavailable(format!("server returned {}: {}", status, detail)),
        });
    }
}
