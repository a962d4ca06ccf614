//! Book domain model.
//!
//! A [`Book`] is one read-only record of the catalog. Records come from an
//! external JSON file and are never modified after loading.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One catalog entry.
///
/// Titles are expected to be unique within a catalog but this is not
/// enforced; see [`count_duplicate_titles`]. Unknown JSON fields such as
/// `imageLink` or `link` are ignored on deserialization.
///
/// # Examples
///
/// ```
/// use booklist::domain::Book;
///
/// let book: Book = serde_json::from_str(r#"{
///     "title": "The Odyssey", "author": "Homer", "country": "Greece",
///     "language": "Greek", "year": -700, "pages": 374,
///     "imageLink": "images/the-odyssey-of-homer.jpg"
/// }"#)?;
/// assert_eq!(book.year, -700);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub country: String,
    pub language: String,
    /// Publication year. Negative for works dated before the common era.
    pub year: i32,
    pub pages: u32,
}

impl Book {
    /// Builds a book from its parts. Mostly useful for tests and fixtures.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        country: impl Into<String>,
        language: impl Into<String>,
        year: i32,
        pages: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            country: country.into(),
            language: language.into(),
            year,
            pages,
        }
    }
}

/// Counts titles that appear more than once in `books`.
///
/// Each repeated occurrence beyond the first counts once, so three books
/// sharing a title contribute two.
#[must_use]
pub fn count_duplicate_titles(books: &[Book]) -> usize {
    let mut seen = HashSet::with_capacity(books.len());
    books.iter().filter(|book| !seen.insert(book.title.as_str())).count()
}
