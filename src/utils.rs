use std::collections::HashSet;

use crate::{
    genre::{self, GenreMapping},
    types::{Book, BookTableRow, BookView, GenreTableRow, Song, SongTableRow},
};

/// Longest description shown in a table cell before it is cut.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 120;

pub fn remove_duplicate_books(books: &mut Vec<Book>) {
    let mut seen_ids = HashSet::new();
    books.retain(|book| seen_ids.insert(book.id.clone()));
}

/// Splits a comma-separated id list, dropping blanks.
pub fn parse_id_list(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn truncate_description(description: Option<&str>) -> String {
    match description {
        None => "No description available".to_string(),
        Some(text) if text.chars().count() > DESCRIPTION_PREVIEW_CHARS => {
            let cut: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            format!("{}...", cut.trim_end())
        }
        Some(text) => text.to_string(),
    }
}

pub fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| "-".to_string(), |r| format!("{:.1} ★", r))
}

pub fn book_table_rows(books: &[BookView]) -> Vec<BookTableRow> {
    books
        .iter()
        .map(|b| BookTableRow {
            title: b.title.clone(),
            author: b.author.clone(),
            rating: format_rating(b.rating),
            description: truncate_description(b.description.as_deref()),
        })
        .collect()
}

pub fn song_table_rows(songs: &[Song]) -> Vec<SongTableRow> {
    songs
        .iter()
        .map(|s| SongTableRow {
            id: s.id.clone(),
            name: s.name.clone(),
            artist: s.artist.clone(),
            tags: s.tags.iter().take(3).cloned().collect::<Vec<_>>().join(","),
        })
        .collect()
}

/// One row per music genre with its book genre and the tags that select it.
pub fn genre_table_rows(mapping: &GenreMapping) -> Vec<GenreTableRow> {
    mapping
        .entries()
        .map(|(music, book)| GenreTableRow {
            music_genre: music.to_string(),
            book_genre: book.to_string(),
            tags: genre::synonyms_for(music).join(", "),
        })
        .collect()
}
