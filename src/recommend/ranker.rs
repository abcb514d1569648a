use std::{cmp::Ordering, collections::HashSet};

use crate::{Result, genre::BookGenre, store::BookCatalog, types::Book, utils};

/// Number of books returned when the caller does not ask for a limit.
pub const DEFAULT_LIMIT: usize = 10;

/// Upper bound on any response, whatever the caller asks for.
pub const MAX_LIMIT: usize = 20;

/// Resolves a requested limit against the default and the hard cap.
///
/// A request for zero books is honored as zero.
pub fn effective_limit(requested: Option<usize>, default: usize) -> usize {
    requested.unwrap_or(default).min(MAX_LIMIT)
}

/// Rating descending with unrated books last, then title ascending.
///
/// Titles compare case-insensitively first; the exact title and then the id
/// break any remaining tie so the order is total.
pub fn compare_books(a: &Book, b: &Book) -> Ordering {
    let by_rating = match (a.rating, b.rating) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_rating
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}

/// Orders candidate books for one genre.
///
/// Books of other genres, excluded ids and duplicate ids are dropped before
/// sorting; nothing is added to make up for them.
pub fn rank_books(
    mut books: Vec<Book>,
    genre: BookGenre,
    exclude_ids: &HashSet<String>,
    limit: usize,
) -> Vec<Book> {
    books.retain(|book| book.genre == genre && !exclude_ids.contains(&book.id));
    utils::remove_duplicate_books(&mut books);
    books.sort_by(compare_books);
    books.truncate(limit.min(MAX_LIMIT));
    books
}

/// Queries the catalog for `genre` and ranks the result.
pub async fn rank<C: BookCatalog + ?Sized>(
    catalog: &C,
    genre: BookGenre,
    exclude_ids: &HashSet<String>,
    limit: usize,
) -> Result<Vec<Book>> {
    let candidates = catalog.find_by_genre(genre).await?;
    Ok(rank_books(candidates, genre, exclude_ids, limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBookCatalog;

    fn book(id: &str, title: &str, rating: Option<f64>) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: "Author".to_string(),
            description: None,
            rating,
            cover_url: None,
            genre: BookGenre::Mystery,
        }
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_rating_desc_unrated_last_title_tiebreak() {
        let books = vec![
            book("1", "Zebra", None),
            book("2", "Beta", Some(4.0)),
            book("3", "alpha", Some(4.0)),
            book("4", "Gamma", Some(4.8)),
            book("5", "Apple", None),
        ];

        let ranked = rank_books(books, BookGenre::Mystery, &HashSet::new(), 10);
        assert_eq!(ids(&ranked), vec!["4", "3", "2", "5", "1"]);
    }

    #[test]
    fn test_truncates_to_limit_and_cap() {
        let books: Vec<Book> = (0..30)
            .map(|i| book(&i.to_string(), &format!("Book {:02}", i), Some(3.0)))
            .collect();

        assert_eq!(
            rank_books(books.clone(), BookGenre::Mystery, &HashSet::new(), 5).len(),
            5
        );
        assert_eq!(
            rank_books(books.clone(), BookGenre::Mystery, &HashSet::new(), 100).len(),
            MAX_LIMIT
        );
        assert!(rank_books(books, BookGenre::Mystery, &HashSet::new(), 0).is_empty());
    }

    #[test]
    fn test_never_pads_with_other_genres() {
        let mut other = book("x", "Other", Some(5.0));
        other.genre = BookGenre::Horror;
        let books = vec![book("1", "Only", Some(2.0)), other];

        let ranked = rank_books(books, BookGenre::Mystery, &HashSet::new(), 10);
        assert_eq!(ids(&ranked), vec!["1"]);
    }

    #[test]
    fn test_excluded_and_duplicate_ids_are_dropped() {
        let books = vec![
            book("1", "One", Some(3.0)),
            book("2", "Two", Some(4.0)),
            book("2", "Two again", Some(1.0)),
            book("3", "Three", Some(5.0)),
        ];
        let exclude: HashSet<String> = ["3".to_string()].into_iter().collect();

        let ranked = rank_books(books, BookGenre::Mystery, &exclude, 10);
        assert_eq!(ids(&ranked), vec!["2", "1"]);
        assert_eq!(ranked[0].title, "Two");
    }

    #[test]
    fn test_effective_limit() {
        assert_eq!(effective_limit(None, DEFAULT_LIMIT), 10);
        assert_eq!(effective_limit(Some(3), DEFAULT_LIMIT), 3);
        assert_eq!(effective_limit(Some(500), DEFAULT_LIMIT), MAX_LIMIT);
        assert_eq!(effective_limit(Some(0), DEFAULT_LIMIT), 0);
    }

    #[tokio::test]
    async fn test_rank_empty_genre_is_empty() {
        let catalog = MemoryBookCatalog::new(vec![book("1", "One", Some(3.0))]);
        let ranked = rank(&catalog, BookGenre::Poetry, &HashSet::new(), 10)
            .await
            .unwrap();
        assert!(ranked.is_empty());
    }
}
