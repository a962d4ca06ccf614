//! JSON file catalog.
//!
//! The catalog file is a top-level JSON array of book objects:
//!
//! ```json
//! [
//!   {
//!     "author": "Chinua Achebe",
//!     "country": "Nigeria",
//!     "language": "English",
//!     "pages": 209,
//!     "title": "Things Fall Apart",
//!     "year": 1958
//!   }
//! ]
//! ```
//!
//! The file is read in full on every [`CatalogSource::load_books`] call; the
//! plugin only ever calls it once.

use crate::catalog::source::CatalogSource;
use crate::domain::book::count_duplicate_titles;
use crate::domain::error::{BooklistError, Result};
use crate::domain::Book;
use std::path::{Path, PathBuf};

/// Read-only catalog backed by a JSON file.
///
/// The file is never written. Each load reads and decodes the whole document,
/// so a catalog edited on disk is picked up by the next worker that loads it.
///
/// # Thread Safety
///
/// The type holds only a path and is `Send`, as [`CatalogSource`] requires.
/// The plugin uses it from the single worker thread.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
}

impl JsonCatalog {
    /// Creates a catalog reading from `file_path`.
    ///
    /// Nothing is touched on disk until [`CatalogSource::load_books`] runs.
    ///
    /// # Parameters
    ///
    /// * `file_path` - Catalog location as seen from the sandbox, usually
    ///   produced by [`resolve_catalog_path`](crate::infrastructure::resolve_catalog_path)
    ///
    /// # Example
    ///
    /// ```
    /// use booklist::catalog::JsonCatalog;
    /// use std::path::Path;
    ///
    /// let catalog = JsonCatalog::new("/host/books.json");
    /// assert_eq!(catalog.path(), Path::new("/host/books.json"));
    /// ```
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Returns the file this catalog reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Decodes a catalog document.
    ///
    /// Repeated titles are kept and only reported in the debug log.
    ///
    /// # Parameters
    ///
    /// * `contents` - Full text of the catalog file
    ///
    /// # Returns
    ///
    /// Every book in document order.
    ///
    /// # Example
    ///
    /// ```
    /// use booklist::catalog::JsonCatalog;
    ///
    /// let books = JsonCatalog::parse(r#"[{"title": "Hamlet", "author": "William Shakespeare",
    ///     "country": "England", "language": "English", "year": 1603, "pages": 432}]"#)?;
    /// assert_eq!(books[0].pages, 432);
    /// # Ok::<(), booklist::BooklistError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BooklistError::Malformed`] if the text is not a JSON array of
    /// books.
    pub fn parse(contents: &str) -> Result<Vec<Book>> {
        let books: Vec<Book> = serde_json::from_str(contents)?;

        let duplicates = count_duplicate_titles(&books);
        if duplicates > 0 {
            tracing::debug!(duplicates, "catalog contains repeated titles");
        }

        Ok(books)
    }
}

impl CatalogSource for JsonCatalog {
    fn load_books(&self) -> Result<Vec<Book>> {
        let path = self.path();
        let _span = tracing::debug_span!("json_load_books", path = ?path).entered();

        if !path.is_file() {
            return Err(BooklistError::Catalog(format!(
                "catalog file not found: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        let books = Self::parse(&contents)?;

        tracing::debug!(count = books.len(), bytes = contents.len(), "catalog decoded");
        Ok(books)
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path().display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn loads_books_and_ignores_extra_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"author": "Homer", "country": "Greece", "imageLink": "x.jpg",
                  "language": "Greek", "link": "https://example.org",
                  "pages": 374, "title": "The Odyssey", "year": -700}},
                {{"author": "Dante Alighieri", "country": "Italy",
                  "language": "Italian", "pages": 928,
                  "title": "The Divine Comedy", "year": 1315}}
            ]"#
        )
        .unwrap();

        let books = JsonCatalog::new(file.path()).load_books().unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(
            books[0],
            Book::new("The Odyssey", "Homer", "Greece", "Greek", -700, 374)
        );
        assert_eq!(books[1].pages, 928);
    }

    #[test]
    fn missing_file_is_a_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonCatalog::new(dir.path().join("books.json"))
            .load_books()
            .unwrap_err();
        assert!(matches!(err, BooklistError::Catalog(_)));
    }

    #[test]
    fn non_array_document_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"books": []}}"#).unwrap();

        let err = JsonCatalog::new(file.path()).load_books().unwrap_err();
        assert!(matches!(err, BooklistError::Malformed(_)));
    }

    #[test]
    fn description_names_the_file() {
        let catalog = JsonCatalog::new("/host/library/books.json");
        assert_eq!(catalog.describe(), "json file /host/library/books.json");
    }

    #[test]
    fn empty_array_is_a_valid_empty_catalog() {
        assert!(JsonCatalog::parse("[]").unwrap().is_empty());
    }
}
