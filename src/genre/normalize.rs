use std::{collections::HashMap, sync::OnceLock};

use super::MusicGenre;

/// Synonym entries mapping normalized tag text to a canonical genre.
/// Keys must already be in [`normalize_tag`] form.
const SYNONYMS: &[(&str, MusicGenre)] = &[
    ("rock", MusicGenre::Rock),
    ("classic rock", MusicGenre::Rock),
    ("hard rock", MusicGenre::Rock),
    ("alternative", MusicGenre::Rock),
    ("alternative rock", MusicGenre::Rock),
    ("grunge", MusicGenre::Rock),
    ("rock n roll", MusicGenre::Rock),
    ("rock and roll", MusicGenre::Rock),
    ("pop", MusicGenre::Pop),
    ("dance", MusicGenre::Pop),
    ("dance pop", MusicGenre::Pop),
    ("synthpop", MusicGenre::Pop),
    ("synth pop", MusicGenre::Pop),
    ("disco", MusicGenre::Pop),
    ("k pop", MusicGenre::Pop),
    ("kpop", MusicGenre::Pop),
    ("jazz", MusicGenre::Jazz),
    ("smooth jazz", MusicGenre::Jazz),
    ("bebop", MusicGenre::Jazz),
    ("swing", MusicGenre::Jazz),
    ("jazz fusion", MusicGenre::Jazz),
    ("electronic", MusicGenre::Electronic),
    ("electronica", MusicGenre::Electronic),
    ("edm", MusicGenre::Electronic),
    ("house", MusicGenre::Electronic),
    ("techno", MusicGenre::Electronic),
    ("trance", MusicGenre::Electronic),
    ("dubstep", MusicGenre::Electronic),
    ("drum and bass", MusicGenre::Electronic),
    ("drum & bass", MusicGenre::Electronic),
    ("dnb", MusicGenre::Electronic),
    ("electro", MusicGenre::Electronic),
    ("classical", MusicGenre::Classical),
    ("orchestral", MusicGenre::Classical),
    ("baroque", MusicGenre::Classical),
    ("opera", MusicGenre::Classical),
    ("hip hop", MusicGenre::HipHop),
    ("hiphop", MusicGenre::HipHop),
    ("rap", MusicGenre::HipHop),
    ("trap", MusicGenre::HipHop),
    ("gangsta rap", MusicGenre::HipHop),
    ("underground hip hop", MusicGenre::HipHop),
    ("metal", MusicGenre::Metal),
    ("heavy metal", MusicGenre::Metal),
    ("death metal", MusicGenre::Metal),
    ("black metal", MusicGenre::Metal),
    ("thrash metal", MusicGenre::Metal),
    ("doom metal", MusicGenre::Metal),
    ("metalcore", MusicGenre::Metal),
    ("folk", MusicGenre::Folk),
    ("folk rock", MusicGenre::Folk),
    ("singer songwriter", MusicGenre::Folk),
    ("acoustic", MusicGenre::Folk),
    ("americana", MusicGenre::Folk),
    ("indie", MusicGenre::Indie),
    ("indie rock", MusicGenre::Indie),
    ("indie pop", MusicGenre::Indie),
    ("lo fi", MusicGenre::Indie),
    ("lofi", MusicGenre::Indie),
    ("punk", MusicGenre::Punk),
    ("punk rock", MusicGenre::Punk),
    ("pop punk", MusicGenre::Punk),
    ("post punk", MusicGenre::Punk),
    ("hardcore", MusicGenre::Punk),
    ("emo", MusicGenre::Punk),
    ("r&b", MusicGenre::RAndB),
    ("r & b", MusicGenre::RAndB),
    ("r and b", MusicGenre::RAndB),
    ("rnb", MusicGenre::RAndB),
    ("rhythm and blues", MusicGenre::RAndB),
    ("contemporary r&b", MusicGenre::RAndB),
    ("soul", MusicGenre::Soul),
    ("neo soul", MusicGenre::Soul),
    ("motown", MusicGenre::Soul),
    ("blues", MusicGenre::Blues),
    ("delta blues", MusicGenre::Blues),
    ("blues rock", MusicGenre::Blues),
    ("country", MusicGenre::Country),
    ("bluegrass", MusicGenre::Country),
    ("alt country", MusicGenre::Country),
    ("ambient", MusicGenre::Ambient),
    ("chillout", MusicGenre::Ambient),
    ("chill", MusicGenre::Ambient),
    ("downtempo", MusicGenre::Ambient),
    ("new age", MusicGenre::Ambient),
    ("drone", MusicGenre::Ambient),
    ("reggae", MusicGenre::Reggae),
    ("ska", MusicGenre::Reggae),
    ("dub", MusicGenre::Reggae),
    ("dancehall", MusicGenre::Reggae),
    ("funk", MusicGenre::Funk),
    ("funky", MusicGenre::Funk),
    ("p funk", MusicGenre::Funk),
];

/// Static synonym map built once via OnceLock.
fn synonym_map() -> &'static HashMap<&'static str, MusicGenre> {
    static MAP: OnceLock<HashMap<&'static str, MusicGenre>> = OnceLock::new();
    MAP.get_or_init(|| SYNONYMS.iter().copied().collect())
}

/// Tag spellings recognized as `genre`, in table order.
///
/// Empty for [`MusicGenre::Unknown`], which no tag selects.
pub fn synonyms_for(genre: MusicGenre) -> Vec<&'static str> {
    SYNONYMS
        .iter()
        .filter(|(_, g)| *g == genre)
        .map(|(key, _)| *key)
        .collect()
}

/// Normalize a tag for lookup: lowercase, `-`/`_` treated as spaces,
/// whitespace runs collapsed, ends trimmed.
pub fn normalize_tag(tag: &str) -> String {
    tag.to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classifies free-form tags into a canonical music genre.
///
/// The earliest tag that matches a known genre or synonym wins; later tags
/// are not consulted. Empty input or no match yields [`MusicGenre::Unknown`].
pub fn normalize<S: AsRef<str>>(tags: &[S]) -> MusicGenre {
    let map = synonym_map();
    tags.iter()
        .find_map(|tag| map.get(normalize_tag(tag.as_ref()).as_str()).copied())
        .unwrap_or(MusicGenre::Unknown)
}
