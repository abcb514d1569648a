//! # Store Module
//!
//! Read-only collaborators consumed by the recommendation pipeline:
//!
//! - [`SongStore`] resolves songs by id
//! - [`BookCatalog`] lists books of one genre
//!
//! Two implementations ship with the crate. The JSON file stores are what the
//! server runs against; they re-read their file on every call so an operator
//! can replace the data without restarting. The in-memory stores back the
//! tests and any caller that already holds its data.
//!
//! Store implementations report an unreadable or malformed backing resource
//! as [`Error::UpstreamUnavailable`](crate::Error::UpstreamUnavailable) and a
//! missing song as [`Error::NotFound`](crate::Error::NotFound).

mod json;
mod memory;

use async_trait::async_trait;

use crate::{
    Result,
    genre::BookGenre,
    types::{Book, Song},
};

pub use json::{JsonBookCatalog, JsonSongStore};
pub use memory::{MemoryBookCatalog, MemorySongStore};

#[async_trait]
pub trait SongStore: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Song>;

    async fn list(&self) -> Result<Vec<Song>>;
}

#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// All books whose genre equals `genre`, in catalog order.
    async fn find_by_genre(&self, genre: BookGenre) -> Result<Vec<Book>>;
}
