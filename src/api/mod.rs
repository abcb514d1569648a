//! # API Module
//!
//! HTTP endpoints served by `songshelf serve`.
//!
//! ## Endpoints
//!
//! ### Recommendations
//!
//! - [`get_recommendations`] - `GET /api/books/recommendations/{song_id}`.
//!   Accepts `max_results` (alias `limit`) and `exclude` query parameters and
//!   returns `{ music_genre, mapped_book_genre, recommendations }`. The
//!   `recommendations` array is always present, possibly empty.
//!
//! ### Songs (read-only)
//!
//! - [`get_song`] - `GET /songs/{song_id}`, the details shown next to the
//!   recommendations
//! - [`list_songs`] - `GET /songs`
//!
//! ### Genres
//!
//! - [`get_mapping`] - `GET /api/genres/mapping`, the active mapping table
//!   and its version
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health`
//!
//! ## Errors
//!
//! Handlers return [`crate::Result`]; [`crate::Error`] renders itself as a
//! `{ "detail": ... }` body with 404 for a missing song, 503 when a store
//! cannot be read and 500 otherwise.

mod genres;
mod health;
mod recommendations;
mod songs;

pub use genres::{get_mapping, mapping_response};
pub use health::health;
pub use recommendations::{RecommendationQuery, get_recommendations};
pub use songs::{get_song, list_songs};
