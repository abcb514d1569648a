use tabled::Table;

use crate::{
    error, info,
    recommend::Recommender,
    success,
    types::{RecommendOptions, RecommendationsResponse},
    utils, warning,
};

/// Runs the recommendation pipeline in-process and prints the result.
///
/// Reads songs and books from the configured JSON files, exactly as the
/// server would, so the output matches what `GET
/// /api/books/recommendations/{song_id}` returns for the same data.
pub async fn recommend(song_id: String, limit: Option<usize>, exclude: Vec<String>) {
    let recommender = match Recommender::from_config().await {
        Ok(r) => r,
        Err(e) => error!("Cannot set up recommendations. Err: {}", e),
    };

    let options = RecommendOptions {
        limit,
        exclude_ids: exclude.into_iter().collect(),
    };

    match recommender.recommend(&song_id, &options).await {
        Ok(result) => render_recommendations(&RecommendationsResponse::from(result)),
        Err(e) => error!("Error loading recommendations: {}", e),
    }
}

/// Prints the genre match line and a table of books, or the empty state.
pub fn render_recommendations(response: &RecommendationsResponse) {
    info!(
        "Music genre {} has been matched to book genre {}",
        response.music_genre, response.mapped_book_genre
    );

    if response.recommendations.is_empty() {
        warning!("No book recommendations found for this song.");
        return;
    }

    let table = Table::new(utils::book_table_rows(&response.recommendations));
    println!("{}", table);
    success!("{} recommendations", response.recommendations.len());
}
