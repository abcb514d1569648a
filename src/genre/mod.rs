//! # Genre Module
//!
//! Closed genre vocabularies and the two total functions that connect them:
//!
//! - [`normalize`] turns free-form song tags into a [`MusicGenre`]
//! - [`GenreMapping`] turns a [`MusicGenre`] into a [`BookGenre`]
//!
//! Neither step can fail. A song without any recognizable tag ends up as
//! [`MusicGenre::Unknown`], which still maps to a book genre, so the pipeline
//! always has something to rank.

mod mapping;
mod normalize;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use mapping::{BUILTIN_MAPPING_VERSION, DEFAULT_BOOK_GENRE, GenreMapping};
pub use normalize::{normalize, normalize_tag, synonyms_for};

/// Canonical music genre derived from song tags.
///
/// Variant order matters: [`MusicGenre::ALL`] and [`MusicGenre::index`] rely
/// on it to index the mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MusicGenre {
    Rock,
    Pop,
    Jazz,
    Electronic,
    Classical,
    HipHop,
    Metal,
    Folk,
    Indie,
    Punk,
    RAndB,
    Soul,
    Blues,
    Country,
    Ambient,
    Reggae,
    Funk,
    Unknown,
}

impl MusicGenre {
    pub const COUNT: usize = 18;

    pub const ALL: [MusicGenre; MusicGenre::COUNT] = [
        MusicGenre::Rock,
        MusicGenre::Pop,
        MusicGenre::Jazz,
        MusicGenre::Electronic,
        MusicGenre::Classical,
        MusicGenre::HipHop,
        MusicGenre::Metal,
        MusicGenre::Folk,
        MusicGenre::Indie,
        MusicGenre::Punk,
        MusicGenre::RAndB,
        MusicGenre::Soul,
        MusicGenre::Blues,
        MusicGenre::Country,
        MusicGenre::Ambient,
        MusicGenre::Reggae,
        MusicGenre::Funk,
        MusicGenre::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MusicGenre::Rock => "rock",
            MusicGenre::Pop => "pop",
            MusicGenre::Jazz => "jazz",
            MusicGenre::Electronic => "electronic",
            MusicGenre::Classical => "classical",
            MusicGenre::HipHop => "hip-hop",
            MusicGenre::Metal => "metal",
            MusicGenre::Folk => "folk",
            MusicGenre::Indie => "indie",
            MusicGenre::Punk => "punk",
            MusicGenre::RAndB => "r-and-b",
            MusicGenre::Soul => "soul",
            MusicGenre::Blues => "blues",
            MusicGenre::Country => "country",
            MusicGenre::Ambient => "ambient",
            MusicGenre::Reggae => "reggae",
            MusicGenre::Funk => "funk",
            MusicGenre::Unknown => "unknown",
        }
    }

    /// Position of the genre in [`MusicGenre::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MusicGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MusicGenre {
    type Err = String;

    /// Parses a canonical genre name. Synonyms are the normalizer's job.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MusicGenre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| format!("unknown music genre '{}'", s))
    }
}

/// Canonical book genre used to query the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookGenre {
    Fiction,
    Mystery,
    Thriller,
    Fantasy,
    ScienceFiction,
    Romance,
    Horror,
    Biography,
    Memoir,
    Poetry,
    Philosophy,
    HistoricalFiction,
    LiteraryFiction,
    UrbanFiction,
    Classic,
    Adventure,
    Unknown,
}

impl BookGenre {
    pub const ALL: [BookGenre; 17] = [
        BookGenre::Fiction,
        BookGenre::Mystery,
        BookGenre::Thriller,
        BookGenre::Fantasy,
        BookGenre::ScienceFiction,
        BookGenre::Romance,
        BookGenre::Horror,
        BookGenre::Biography,
        BookGenre::Memoir,
        BookGenre::Poetry,
        BookGenre::Philosophy,
        BookGenre::HistoricalFiction,
        BookGenre::LiteraryFiction,
        BookGenre::UrbanFiction,
        BookGenre::Classic,
        BookGenre::Adventure,
        BookGenre::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookGenre::Fiction => "fiction",
            BookGenre::Mystery => "mystery",
            BookGenre::Thriller => "thriller",
            BookGenre::Fantasy => "fantasy",
            BookGenre::ScienceFiction => "science-fiction",
            BookGenre::Romance => "romance",
            BookGenre::Horror => "horror",
            BookGenre::Biography => "biography",
            BookGenre::Memoir => "memoir",
            BookGenre::Poetry => "poetry",
            BookGenre::Philosophy => "philosophy",
            BookGenre::HistoricalFiction => "historical-fiction",
            BookGenre::LiteraryFiction => "literary-fiction",
            BookGenre::UrbanFiction => "urban-fiction",
            BookGenre::Classic => "classic",
            BookGenre::Adventure => "adventure",
            BookGenre::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BookGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookGenre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        BookGenre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| format!("unknown book genre '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_music_genre_index_matches_all_order() {
        for (i, genre) in MusicGenre::ALL.iter().enumerate() {
            assert_eq!(genre.index(), i);
        }
    }

    #[test]
    fn test_display_and_from_str_agree() {
        for genre in MusicGenre::ALL {
            assert_eq!(genre.to_string().parse::<MusicGenre>(), Ok(genre));
        }
        for genre in BookGenre::ALL {
            assert_eq!(genre.to_string().parse::<BookGenre>(), Ok(genre));
        }
    }

    #[test]
    fn test_serde_uses_display_names() {
        assert_eq!(
            serde_json::to_string(&MusicGenre::HipHop).unwrap(),
            "\"hip-hop\""
        );
        assert_eq!(
            serde_json::to_string(&MusicGenre::RAndB).unwrap(),
            "\"r-and-b\""
        );
        let parsed: BookGenre = serde_json::from_str("\"science-fiction\"").unwrap();
        assert_eq!(parsed, BookGenre::ScienceFiction);
    }

    #[test]
    fn test_from_str_rejects_synonyms() {
        assert!("hip hop".parse::<MusicGenre>().is_err());
        assert_eq!(" Jazz ".parse::<MusicGenre>(), Ok(MusicGenre::Jazz));
    }
}
