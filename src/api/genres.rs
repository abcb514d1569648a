use axum::{Json, extract::State};

use crate::{
    genre::GenreMapping,
    server::AppState,
    types::{GenreMappingEntry, GenreMappingResponse},
};

pub fn mapping_response(mapping: &GenreMapping) -> GenreMappingResponse {
    GenreMappingResponse {
        version: mapping.version().to_string(),
        default_book_genre: mapping
            .map_to_book_genre(crate::genre::MusicGenre::Unknown)
            .to_string(),
        mapping: mapping
            .entries()
            .map(|(music, book)| GenreMappingEntry {
                music_genre: music.to_string(),
                book_genre: book.to_string(),
            })
            .collect(),
    }
}

/// GET /api/genres/mapping
pub async fn get_mapping(State(state): State<AppState>) -> Json<GenreMappingResponse> {
    Json(mapping_response(state.recommender.mapping()))
}
