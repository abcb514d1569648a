use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    Result,
    server::AppState,
    types::{Song, SongsResponse},
};

/// GET /songs
pub async fn list_songs(State(state): State<AppState>) -> Result<Json<SongsResponse>> {
    let songs = state.recommender.songs().list().await?;
    Ok(Json(SongsResponse { songs }))
}

/// GET /songs/{song_id}
pub async fn get_song(
    State(state): State<AppState>,
    Path(song_id): Path<String>,
) -> Result<Json<Song>> {
    let song = state.recommender.songs().get_by_id(&song_id).await?;
    Ok(Json(song))
}
