use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::genre::{BookGenre, MusicGenre};

/// Lowest and highest rating a catalog book may carry.
pub const RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listeners: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playcount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    pub genre: BookGenre,
}

impl Book {
    /// Drops a rating that is not a finite number inside [`RATING_RANGE`].
    ///
    /// Returns `true` when the rating had to be dropped.
    pub fn sanitize_rating(&mut self) -> bool {
        match self.rating {
            Some(r) if !r.is_finite() || !RATING_RANGE.contains(&r) => {
                self.rating = None;
                true
            }
            _ => false,
        }
    }
}

/// Per-request knobs for the recommendation pipeline.
#[derive(Debug, Clone, Default)]
pub struct RecommendOptions {
    /// Maximum number of books; `None` uses the configured default.
    pub limit: Option<usize>,
    /// Book ids that must not be recommended.
    pub exclude_ids: HashSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub song_id: String,
    pub music_genre: MusicGenre,
    pub mapped_book_genre: BookGenre,
    pub recommendations: Vec<Book>,
}

/// Book as rendered by the recommendations page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookView {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl From<Book> for BookView {
    fn from(book: Book) -> Self {
        BookView {
            id: book.id,
            title: book.title,
            author: book.author,
            description: book.description,
            rating: book.rating,
            cover_url: book.cover_url,
            genres: vec![book.genre.to_string()],
        }
    }
}

/// Body of `GET /api/books/recommendations/{song_id}`.
///
/// `recommendations` is always serialized, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub music_genre: String,
    pub mapped_book_genre: String,
    pub recommendations: Vec<BookView>,
}

impl From<RecommendationResult> for RecommendationsResponse {
    fn from(result: RecommendationResult) -> Self {
        RecommendationsResponse {
            music_genre: result.music_genre.to_string(),
            mapped_book_genre: result.mapped_book_genre.to_string(),
            recommendations: result
                .recommendations
                .into_iter()
                .map(BookView::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongsResponse {
    pub songs: Vec<Song>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreMappingResponse {
    pub version: String,
    pub default_book_genre: String,
    pub mapping: Vec<GenreMappingEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Tabled)]
pub struct GenreMappingEntry {
    pub music_genre: String,
    pub book_genre: String,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub music_genre: String,
    pub book_genre: String,
    pub tags: String,
}

#[derive(Tabled)]
pub struct BookTableRow {
    pub title: String,
    pub author: String,
    pub rating: String,
    pub description: String,
}

#[derive(Tabled)]
pub struct SongTableRow {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub tags: String,
}
