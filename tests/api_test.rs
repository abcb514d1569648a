use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use songshelf::{
    genre::{BookGenre, GenreMapping, MusicGenre},
    recommend::Recommender,
    server::{AppState, build_router},
    store::{JsonBookCatalog, MemoryBookCatalog, MemorySongStore},
    types::{Book, Song},
};

fn song(id: &str, tags: &[&str]) -> Song {
    Song {
        id: id.to_string(),
        name: format!("Song {}", id),
        artist: "Artist".to_string(),
        album: Some("Album".to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        url: None,
        listeners: Some(1200),
        playcount: None,
        created_at: None,
    }
}

fn book(id: &str, title: &str, genre: BookGenre, rating: Option<f64>) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: "Author".to_string(),
        description: None,
        rating,
        cover_url: Some(format!("https://covers.example/{}.jpg", id)),
        genre,
    }
}

fn songs() -> Vec<Song> {
    vec![song("s1", &["Hip Hop", "Party"]), song("s2", &["metal"])]
}

fn test_app() -> Router {
    let recommender = Recommender::new(
        Arc::new(MemorySongStore::new(songs())),
        Arc::new(MemoryBookCatalog::new(vec![
            book("b1", "Street Lights", BookGenre::UrbanFiction, Some(4.1)),
            book("b2", "Corner Store", BookGenre::UrbanFiction, Some(4.6)),
            book("b3", "Block Party", BookGenre::UrbanFiction, Some(9.0)),
        ])),
        GenreMapping::builtin(),
    );
    build_router(AppState::new(recommender))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get_json(test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "songshelf");
}

#[tokio::test]
async fn test_recommendations_response_shape() {
    let (status, json) = get_json(test_app(), "/api/books/recommendations/s1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["music_genre"], "hip-hop");
    assert_eq!(json["mapped_book_genre"], "urban-fiction");

    let books = json["recommendations"].as_array().unwrap();
    assert_eq!(books.len(), 3);
    assert_eq!(books[0]["id"], "b2");
    assert_eq!(books[0]["rating"], 4.6);
    assert_eq!(books[0]["genres"], serde_json::json!(["urban-fiction"]));
    assert_eq!(books[0]["cover_url"], "https://covers.example/b2.jpg");

    // Out-of-range rating is dropped and the book ranks last
    assert_eq!(books[2]["id"], "b3");
    assert!(books[2].get("rating").is_none_or(Value::is_null));
}

#[tokio::test]
async fn test_recommendations_query_parameters() {
    let (status, json) = get_json(
        test_app(),
        "/api/books/recommendations/s1?max_results=1&exclude=b2",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let books = json["recommendations"].as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["id"], "b1");

    let (_, json) = get_json(test_app(), "/api/books/recommendations/s1?limit=2").await;
    assert_eq!(json["recommendations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_malformed_query_returns_json_400() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/books/recommendations/s1?max_results=abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"), "{}", content_type);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    let detail = json["detail"].as_str().unwrap();
    assert!(detail.contains("max_results"), "{}", detail);
}

#[tokio::test]
async fn test_empty_recommendations_are_serialized() {
    let (status, json) = get_json(test_app(), "/api/books/recommendations/s2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["music_genre"], "metal");
    assert_eq!(json["mapped_book_genre"], "horror");
    assert_eq!(json["recommendations"], serde_json::json!([]));
}

#[tokio::test]
async fn test_unknown_song_returns_404() {
    let (status, json) = get_json(test_app(), "/api/books/recommendations/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Song not found");
}

#[tokio::test]
async fn test_unavailable_catalog_returns_503() {
    let dir = tempfile::tempdir().unwrap();
    let recommender = Recommender::new(
        Arc::new(MemorySongStore::new(songs())),
        Arc::new(JsonBookCatalog::new(dir.path().join("missing.json"))),
        GenreMapping::builtin(),
    );
    let app = build_router(AppState::new(recommender));

    let (status, json) = get_json(app, "/api/books/recommendations/s1").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let detail = json["detail"].as_str().unwrap();
    assert!(!detail.contains("missing.json"));
}

#[tokio::test]
async fn test_song_endpoints() {
    let (status, json) = get_json(test_app(), "/songs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["songs"].as_array().unwrap().len(), 2);

    let (status, json) = get_json(test_app(), "/songs/s1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "s1");
    assert_eq!(json["album"], "Album");
    assert_eq!(json["tags"], serde_json::json!(["Hip Hop", "Party"]));

    let (status, json) = get_json(test_app(), "/songs/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Song not found");
}

#[tokio::test]
async fn test_genre_mapping_endpoint() {
    let (status, json) = get_json(test_app(), "/api/genres/mapping").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["version"], "builtin-1");
    assert_eq!(json["default_book_genre"], "literary-fiction");

    let entries = json["mapping"].as_array().unwrap();
    assert_eq!(entries.len(), MusicGenre::ALL.len());
    assert!(entries.iter().any(|e| {
        e["music_genre"] == "hip-hop" && e["book_genre"] == "urban-fiction"
    }));
}
