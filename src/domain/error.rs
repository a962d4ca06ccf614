//! Error types for the Booklist plugin.
//!
//! [`BooklistError`] is the single error type used across the crate, with
//! [`Result`] as the matching alias. Variants wrap lower-level failures from
//! the filesystem, the JSON decoder and theme parsing.

use thiserror::Error;

/// The main error type for Booklist operations.
///
/// Only catalog loading can fail at runtime in a way the user could notice,
/// and even that is swallowed by the application layer (logged, then rendered
/// as an empty catalog). The remaining variants cover configuration and
/// theme problems that fall back to defaults.
///
/// # Examples
///
/// ```
/// use booklist::domain::BooklistError;
///
/// let err = BooklistError::Catalog("no such file".to_string());
/// assert_eq!(err.to_string(), "Catalog error: no such file");
/// ```
#[derive(Debug, Error)]
pub enum BooklistError {
    /// The catalog source could not produce a book list.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file was read but is not a JSON array of books.
    #[error("Malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// A configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Booklist operations.
pub type Result<T> = std::result::Result<T, BooklistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/books.json")?)
        }

        let err = read_missing().unwrap_err();
        assert!(matches!(err, BooklistError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn json_errors_convert_to_malformed() {
        fn parse() -> Result<Vec<u32>> {
            Ok(serde_json::from_str("{not json")?)
        }

        assert!(matches!(parse().unwrap_err(), BooklistError::Malformed(_)));
    }
}
