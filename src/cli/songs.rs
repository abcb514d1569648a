use tabled::Table;

use crate::{
    config, error,
    store::{JsonSongStore, SongStore},
    utils, warning,
};

/// Lists the songs in the configured song store.
pub async fn list_songs(search: Option<String>) {
    let store = JsonSongStore::new(config::songs_file());
    let mut songs = match store.list().await {
        Ok(songs) => songs,
        Err(e) => error!("Failed to load songs. Err: {}", e),
    };

    songs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    if let Some(term) = search {
        let term = term.to_lowercase();
        songs.retain(|s| {
            s.name.to_lowercase().contains(&term) || s.artist.to_lowercase().contains(&term)
        });
    }

    if songs.is_empty() {
        warning!("No songs found in {}", store.path().display());
        return;
    }

    println!("{}", Table::new(utils::song_table_rows(&songs)));
}
