use std::{fs, path::PathBuf};

use songshelf::{
    Error,
    genre::BookGenre,
    store::{BookCatalog, JsonBookCatalog, JsonSongStore, SongStore},
};
use tempfile::TempDir;

// Helper function to write a data file into a temp dir
fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const SONGS: &str = r#"[
  {
    "_id": "64f1c0",
    "name": "Alright",
    "artist": "Kendrick Lamar",
    "album": "To Pimp a Butterfly",
    "tags": ["Hip-Hop", "rap", "conscious"],
    "listeners": 1500000,
    "created_at": "2024-03-01T12:00:00Z"
  },
  {
    "id": "s2",
    "name": "So What",
    "artist": "Miles Davis",
    "tags": []
  }
]"#;

const BOOKS: &str = r#"[
  {"id": "b1", "title": "The Big Sleep", "author": "Raymond Chandler", "rating": 4.1, "genre": "mystery"},
  {"id": "b2", "title": "Gone Girl", "author": "Gillian Flynn", "rating": 7.5, "genre": "mystery"},
  {"id": "b3", "title": "Dune", "author": "Frank Herbert", "genre": "science-fiction"}
]"#;

#[tokio::test]
async fn test_song_store_reads_both_id_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonSongStore::new(write_file(&dir, "songs.json", SONGS));

    let song = store.get_by_id("64f1c0").await.unwrap();
    assert_eq!(song.name, "Alright");
    assert_eq!(song.tags.len(), 3);
    assert_eq!(song.listeners, Some(1_500_000));
    assert!(song.created_at.is_some());

    let song = store.get_by_id("s2").await.unwrap();
    assert!(song.tags.is_empty());
    assert!(song.album.is_none());

    assert_eq!(store.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_song_store_missing_song() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonSongStore::new(write_file(&dir, "songs.json", SONGS));

    let err = store.get_by_id("nope").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_song_store_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();

    let store = JsonSongStore::new(dir.path().join("missing.json"));
    let err = store.get_by_id("s1").await.unwrap_err();
    assert!(matches!(err, Error::UpstreamUnavailable(_)));

    let store = JsonSongStore::new(write_file(&dir, "broken.json", "{ not json"));
    let err = store.list().await.unwrap_err();
    assert!(matches!(err, Error::UpstreamUnavailable(_)));
}

#[tokio::test]
async fn test_book_catalog_filters_and_sanitizes() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = JsonBookCatalog::new(write_file(&dir, "books.json", BOOKS));

    let books = catalog.find_by_genre(BookGenre::Mystery).await.unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[0].rating, Some(4.1));
    assert_eq!(books[1].rating, None);

    let books = catalog.find_by_genre(BookGenre::ScienceFiction).await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");

    assert!(catalog.find_by_genre(BookGenre::Poetry).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_book_catalog_picks_up_file_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "books.json", "[]");
    let catalog = JsonBookCatalog::new(&path);

    assert!(catalog.find_by_genre(BookGenre::Mystery).await.unwrap().is_empty());

    fs::write(&path, BOOKS).unwrap();
    assert_eq!(
        catalog.find_by_genre(BookGenre::Mystery).await.unwrap().len(),
        2
    );
}

#[tokio::test]
async fn test_book_catalog_unknown_genre_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = JsonBookCatalog::new(write_file(
        &dir,
        "books.json",
        r#"[{"id": "b1", "title": "T", "author": "A", "genre": "cookbook"}]"#,
    ));

    let err = catalog.find_by_genre(BookGenre::Fiction).await.unwrap_err();
    assert!(matches!(err, Error::UpstreamUnavailable(_)));
}
