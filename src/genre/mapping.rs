use std::{fmt, path::Path};

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};

use super::{BookGenre, MusicGenre};
use crate::{Error, Result};

/// Book genre every unclassified song lands on.
pub const DEFAULT_BOOK_GENRE: BookGenre = BookGenre::LiteraryFiction;

pub const BUILTIN_MAPPING_VERSION: &str = "builtin-1";

/// Built-in table, in [`MusicGenre::ALL`] order.
const BUILTIN: [(MusicGenre, BookGenre); MusicGenre::COUNT] = [
    (MusicGenre::Rock, BookGenre::Adventure),
    (MusicGenre::Pop, BookGenre::Romance),
    (MusicGenre::Jazz, BookGenre::Mystery),
    (MusicGenre::Electronic, BookGenre::ScienceFiction),
    (MusicGenre::Classical, BookGenre::Classic),
    (MusicGenre::HipHop, BookGenre::UrbanFiction),
    (MusicGenre::Metal, BookGenre::Horror),
    (MusicGenre::Folk, BookGenre::HistoricalFiction),
    (MusicGenre::Indie, BookGenre::LiteraryFiction),
    (MusicGenre::Punk, BookGenre::Thriller),
    (MusicGenre::RAndB, BookGenre::Romance),
    (MusicGenre::Soul, BookGenre::Memoir),
    (MusicGenre::Blues, BookGenre::Biography),
    (MusicGenre::Country, BookGenre::Fiction),
    (MusicGenre::Ambient, BookGenre::Poetry),
    (MusicGenre::Reggae, BookGenre::Philosophy),
    (MusicGenre::Funk, BookGenre::Fantasy),
    (MusicGenre::Unknown, DEFAULT_BOOK_GENRE),
];

/// On-disk shape of an editable mapping resource.
#[derive(Debug, Deserialize)]
struct MappingFile {
    version: String,
    mapping: MappingPairs,
}

/// Entries of the `mapping` object in document order. Repeated keys are kept
/// so the loader can reject them; a map type would keep only the last one.
#[derive(Debug)]
struct MappingPairs(Vec<(String, String)>);

impl<'de> Deserialize<'de> for MappingPairs {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = MappingPairs;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of music genre to book genre")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<MappingPairs, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, String>()? {
                    pairs.push(entry);
                }
                Ok(MappingPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

/// Total mapping from music genre to book genre.
///
/// The table is a fixed-size array indexed by [`MusicGenre::index`], so a
/// constructed mapping cannot be missing an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreMapping {
    version: String,
    entries: [BookGenre; MusicGenre::COUNT],
}

impl Default for GenreMapping {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GenreMapping {
    pub fn builtin() -> Self {
        Self {
            version: BUILTIN_MAPPING_VERSION.to_string(),
            entries: BUILTIN.map(|(_, book)| book),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn map_to_book_genre(&self, genre: MusicGenre) -> BookGenre {
        self.entries[genre.index()]
    }

    /// All entries in [`MusicGenre::ALL`] order.
    pub fn entries(&self) -> impl Iterator<Item = (MusicGenre, BookGenre)> + '_ {
        MusicGenre::ALL
            .iter()
            .map(move |genre| (*genre, self.map_to_book_genre(*genre)))
    }

    /// Parses a mapping resource.
    ///
    /// The document must name every music genre exactly once, using canonical
    /// names on both sides. Anything else is a [`Error::Config`].
    pub fn from_json(content: &str) -> Result<Self> {
        let file: MappingFile = serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("invalid genre mapping document: {}", e)))?;

        if file.version.trim().is_empty() {
            return Err(Error::Config("genre mapping version must not be empty".into()));
        }

        let mut entries: [Option<BookGenre>; MusicGenre::COUNT] =
            [None; MusicGenre::COUNT];

        for (music, book) in &file.mapping.0 {
            let music: MusicGenre = music.parse().map_err(Error::Config)?;
            let book: BookGenre = book.parse().map_err(Error::Config)?;
            if entries[music.index()].replace(book).is_some() {
                return Err(Error::Config(format!(
                    "music genre '{}' is mapped more than once",
                    music
                )));
            }
        }

        let missing: Vec<&str> = MusicGenre::ALL
            .iter()
            .filter(|g| entries[g.index()].is_none())
            .map(|g| g.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "genre mapping {} is missing entries for: {}",
                file.version,
                missing.join(", ")
            )));
        }

        Ok(Self {
            version: file.version,
            entries: entries.map(|e| e.unwrap_or(DEFAULT_BOOK_GENRE)),
        })
    }

    /// Loads a mapping resource from disk. Intended to run once at startup.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = async_fs::read_to_string(path).await.map_err(|e| {
            Error::Config(format!(
                "cannot read genre mapping {}: {}",
                path.display(),
                e
            ))
        })?;
        let mapping = Self::from_json(&content)?;
        tracing::info!(
            version = mapping.version(),
            path = %path.display(),
            "loaded genre mapping"
        );
        Ok(mapping)
    }
}
