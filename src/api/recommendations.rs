use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::{
    Error, Result,
    server::AppState,
    types::{RecommendOptions, RecommendationsResponse},
    utils,
};

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    /// Maximum number of books; capped server-side.
    #[serde(default, alias = "limit")]
    pub max_results: Option<usize>,

    /// Comma-separated book ids to leave out.
    #[serde(default)]
    pub exclude: Option<String>,
}

impl RecommendationQuery {
    pub fn into_options(self) -> RecommendOptions {
        RecommendOptions {
            limit: self.max_results,
            exclude_ids: self
                .exclude
                .as_deref()
                .map(utils::parse_id_list)
                .unwrap_or_default(),
        }
    }
}

/// GET /api/books/recommendations/{song_id}
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(song_id): Path<String>,
    query: std::result::Result<Query<RecommendationQuery>, QueryRejection>,
) -> Result<Json<RecommendationsResponse>> {
    let Query(query) =
        query.map_err(|rejection| Error::InvalidInput(rejection.body_text()))?;
    let options = query.into_options();
    let result = state.recommender.recommend(&song_id, &options).await?;

    tracing::info!(
        song = %song_id,
        music_genre = %result.music_genre,
        book_genre = %result.mapped_book_genre,
        count = result.recommendations.len(),
        "served recommendations"
    );

    Ok(Json(RecommendationsResponse::from(result)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_into_options() {
        let query = RecommendationQuery {
            max_results: Some(4),
            exclude: Some("b1, b2,,".to_string()),
        };
        let options = query.into_options();
        assert_eq!(options.limit, Some(4));
        assert_eq!(options.exclude_ids.len(), 2);
        assert!(options.exclude_ids.contains("b2"));
    }

    #[test]
    fn test_empty_query() {
        let options = RecommendationQuery::default().into_options();
        assert_eq!(options.limit, None);
        assert!(options.exclude_ids.is_empty());
    }
}
