//! # Recommend Module
//!
//! The recommendation pipeline for one song:
//!
//! ```text
//! song id
//!   -> SongStore::get_by_id        (NotFound / UpstreamUnavailable)
//!   -> genre::normalize(tags)      (total)
//!   -> GenreMapping                (total)
//!   -> ranker::rank(catalog, ...)  (UpstreamUnavailable)
//!   -> RecommendationResult
//! ```
//!
//! [`Recommender`] is the only entry point that can fail, and only through
//! its two collaborators. Errors are returned as the stores produced them;
//! turning them into HTTP responses is left to [`crate::api`].

pub mod ranker;

use std::sync::Arc;

use crate::{
    Result, config,
    genre::{self, GenreMapping},
    store::{BookCatalog, JsonBookCatalog, JsonSongStore, SongStore},
    types::{RecommendOptions, RecommendationResult},
};

pub use ranker::{DEFAULT_LIMIT, MAX_LIMIT};

/// Recommendation facade. Cheap to clone; all state is shared and immutable.
#[derive(Clone)]
pub struct Recommender {
    songs: Arc<dyn SongStore>,
    catalog: Arc<dyn BookCatalog>,
    mapping: Arc<GenreMapping>,
    default_limit: usize,
}

impl Recommender {
    pub fn new(
        songs: Arc<dyn SongStore>,
        catalog: Arc<dyn BookCatalog>,
        mapping: GenreMapping,
    ) -> Self {
        Self {
            songs,
            catalog,
            mapping: Arc::new(mapping),
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit.clamp(1, MAX_LIMIT);
        self
    }

    /// Builds the facade from the environment: JSON file stores and either
    /// the built-in mapping or the configured mapping resource.
    pub async fn from_config() -> Result<Self> {
        let mapping = match config::genre_mapping_file() {
            Some(path) => GenreMapping::load(&path).await?,
            None => GenreMapping::builtin(),
        };

        let songs = JsonSongStore::new(config::songs_file());
        let catalog = JsonBookCatalog::new(config::books_file());
        tracing::debug!(
            songs = %songs.path().display(),
            books = %catalog.path().display(),
            mapping = mapping.version(),
            "recommendation sources configured"
        );

        Ok(Self::new(Arc::new(songs), Arc::new(catalog), mapping)
            .with_default_limit(config::default_limit()))
    }

    pub fn mapping(&self) -> &GenreMapping {
        &self.mapping
    }

    pub fn songs(&self) -> &dyn SongStore {
        self.songs.as_ref()
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    pub async fn recommend(
        &self,
        song_id: &str,
        options: &RecommendOptions,
    ) -> Result<RecommendationResult> {
        let song = self.songs.get_by_id(song_id).await?;

        let music_genre = genre::normalize(&song.tags);
        let book_genre = self.mapping.map_to_book_genre(music_genre);
        let limit = ranker::effective_limit(options.limit, self.default_limit);

        let recommendations = ranker::rank(
            self.catalog.as_ref(),
            book_genre,
            &options.exclude_ids,
            limit,
        )
        .await?;

        tracing::debug!(
            song = %song.id,
            %music_genre,
            %book_genre,
            count = recommendations.len(),
            "built recommendations"
        );

        Ok(RecommendationResult {
            song_id: song.id,
            music_genre,
            mapped_book_genre: book_genre,
            recommendations,
        })
    }
}
