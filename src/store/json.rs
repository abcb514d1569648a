use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{BookCatalog, SongStore};
use crate::{
    Error, Result,
    genre::BookGenre,
    types::{Book, Song},
};

async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = async_fs::read_to_string(path).await.map_err(|e| {
        Error::UpstreamUnavailable(format!("cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        Error::UpstreamUnavailable(format!("malformed {}: {}", path.display(), e))
    })
}

/// Song store backed by a JSON array of songs.
pub struct JsonSongStore {
    path: PathBuf,
}

impl JsonSongStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SongStore for JsonSongStore {
    async fn get_by_id(&self, id: &str) -> Result<Song> {
        let songs: Vec<Song> = read_records(&self.path).await?;
        tracing::debug!(count = songs.len(), path = %self.path.display(), "loaded songs");
        songs
            .into_iter()
            .find(|song| song.id == id)
            .ok_or_else(|| Error::NotFound("Song".to_string()))
    }

    async fn list(&self) -> Result<Vec<Song>> {
        read_records(&self.path).await
    }
}

/// Book catalog backed by a JSON array of books.
///
/// Ratings outside the accepted range are dropped on read, so such books
/// rank with the unrated ones.
pub struct JsonBookCatalog {
    path: PathBuf,
}

impl JsonBookCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BookCatalog for JsonBookCatalog {
    async fn find_by_genre(&self, genre: BookGenre) -> Result<Vec<Book>> {
        let books: Vec<Book> = read_records(&self.path).await?;
        let total = books.len();

        let matching: Vec<Book> = books
            .into_iter()
            .filter(|book| book.genre == genre)
            .map(|mut book| {
                if book.sanitize_rating() {
                    tracing::warn!(book = %book.id, "ignoring out-of-range rating");
                }
                book
            })
            .collect();

        tracing::debug!(
            %genre,
            total,
            matching = matching.len(),
            "queried book catalog"
        );
        Ok(matching)
    }
}
