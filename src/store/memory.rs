use async_trait::async_trait;

use super::{BookCatalog, SongStore};
use crate::{
    Error, Result,
    genre::BookGenre,
    types::{Book, Song},
};

#[derive(Debug, Clone, Default)]
pub struct MemorySongStore {
    songs: Vec<Song>,
}

impl MemorySongStore {
    pub fn new(songs: Vec<Song>) -> Self {
        Self { songs }
    }
}

#[async_trait]
impl SongStore for MemorySongStore {
    async fn get_by_id(&self, id: &str) -> Result<Song> {
        self.songs
            .iter()
            .find(|song| song.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound("Song".to_string()))
    }

    async fn list(&self) -> Result<Vec<Song>> {
        Ok(self.songs.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBookCatalog {
    books: Vec<Book>,
}

impl MemoryBookCatalog {
    /// Builds the catalog, dropping ratings outside the accepted range.
    pub fn new(mut books: Vec<Book>) -> Self {
        for book in &mut books {
            book.sanitize_rating();
        }
        Self { books }
    }
}

#[async_trait]
impl BookCatalog for MemoryBookCatalog {
    async fn find_by_genre(&self, genre: BookGenre) -> Result<Vec<Book>> {
        Ok(self
            .books
            .iter()
            .filter(|book| book.genre == genre)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, genre: BookGenre, rating: Option<f64>) -> Book {
        Book {
            id: id.to_string(),
            title: format!("Title {}", id),
            author: "Author".to_string(),
            description: None,
            rating,
            cover_url: None,
            genre,
        }
    }

    #[tokio::test]
    async fn test_find_by_genre_filters() {
        let catalog = MemoryBookCatalog::new(vec![
            book("a", BookGenre::Horror, None),
            book("b", BookGenre::Poetry, None),
            book("c", BookGenre::Horror, Some(4.0)),
        ]);

        let horror = catalog.find_by_genre(BookGenre::Horror).await.unwrap();
        let ids: Vec<&str> = horror.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        assert!(
            catalog
                .find_by_genre(BookGenre::Memoir)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_out_of_range_ratings_are_dropped() {
        let catalog = MemoryBookCatalog::new(vec![
            book("a", BookGenre::Horror, Some(7.5)),
            book("b", BookGenre::Horror, Some(f64::NAN)),
            book("c", BookGenre::Horror, Some(5.0)),
        ]);

        let books = catalog.find_by_genre(BookGenre::Horror).await.unwrap();
        assert_eq!(books[0].rating, None);
        assert_eq!(books[1].rating, None);
        assert_eq!(books[2].rating, Some(5.0));
    }

    #[tokio::test]
    async fn test_missing_song_is_not_found() {
        let store = MemorySongStore::default();
        assert!(matches!(
            store.get_by_id("nope").await,
            Err(Error::NotFound(_))
        ));
    }
}
