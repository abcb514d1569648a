use tabled::Table;

use crate::{
    config, error,
    genre::{self, GenreMapping, MusicGenre},
    info, utils, warning,
};

async fn active_mapping() -> GenreMapping {
    match config::genre_mapping_file() {
        Some(path) => match GenreMapping::load(&path).await {
            Ok(mapping) => mapping,
            Err(e) => error!("Cannot load genre mapping. Err: {}", e),
        },
        None => GenreMapping::builtin(),
    }
}

/// Shows how a list of tags is classified and which book genre it lands on.
pub async fn normalize(tags: Vec<String>) {
    let mapping = active_mapping().await;
    let music_genre = genre::normalize(&tags);

    match tags
        .iter()
        .find(|tag| genre::normalize(&[tag.as_str()]) == music_genre)
    {
        Some(tag) if music_genre != MusicGenre::Unknown => {
            info!("Tag '{}' classified as {}", tag, music_genre)
        }
        _ => warning!("No tag matched a known genre, using {}", music_genre),
    }

    info!(
        "Music genre {} maps to book genre {}",
        music_genre,
        mapping.map_to_book_genre(music_genre)
    );
}

/// Shows the book genre for one canonical music genre.
pub async fn map(music_genre: String) {
    let music_genre: MusicGenre = match music_genre.parse() {
        Ok(g) => g,
        Err(e) => error!("{}. Try `songshelf genre table` for the known genres.", e),
    };

    let mapping = active_mapping().await;
    info!(
        "Music genre {} maps to book genre {}",
        music_genre,
        mapping.map_to_book_genre(music_genre)
    );
}

/// Prints the active mapping table with the tags behind each music genre.
pub async fn table() {
    let mapping = active_mapping().await;

    info!("Genre mapping version {}", mapping.version());
    println!("{}", Table::new(utils::genre_table_rows(&mapping)));
}
