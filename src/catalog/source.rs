//! Catalog source abstraction.
//!
//! The worker loads the catalog through [`CatalogSource`] so the load path
//! can be exercised without touching the Zellij sandbox filesystem.

use crate::domain::error::Result;
use crate::domain::Book;

/// Something that can produce the full book list once.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): reads a JSON array from disk
pub trait CatalogSource: Send {
    /// Loads every book, in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or decoded.
    fn load_books(&self) -> Result<Vec<Book>>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// A fixed list of books held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    books: Vec<Book>,
}

impl StaticCatalog {
    #[must_use]
    pub const fn new(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl CatalogSource for StaticCatalog {
    fn load_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn describe(&self) -> String {
        format!("static catalog ({} books)", self.books.len())
    }
}
