//! Page size choices and page arithmetic.
//!
//! Pages are 1-based. Slicing never panics: a page past the end of the list
//! simply yields an empty slice.

use crate::domain::error::{BooklistError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Items-per-page options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    /// Number of books shown per page.
    ///
    /// # Example
    ///
    /// ```
    /// use booklist::domain::PageSize;
    ///
    /// assert_eq!(PageSize::default().get(), 20);
    /// assert_eq!(PageSize::Hundred.get(), 100);
    /// ```
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    /// Next option, wrapping from 100 back to 20.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Twenty => Self::Fifty,
            Self::Fifty => Self::Hundred,
            Self::Hundred => Self::Twenty,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = BooklistError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            20 => Ok(Self::Twenty),
            50 => Ok(Self::Fifty),
            100 => Ok(Self::Hundred),
            other => Err(BooklistError::Config(format!(
                "page size must be 20, 50 or 100, got {other}"
            ))),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Number of pages needed for `count` items.
///
/// # Examples
///
/// ```
/// use booklist::domain::pagination::{total_pages, PageSize};
///
/// assert_eq!(total_pages(45, PageSize::Twenty), 3);
/// assert_eq!(total_pages(0, PageSize::Twenty), 0);
/// ```
#[must_use]
pub const fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get())
}

/// Index range of `page` within a list of `count` items, clamped to the list.
///
/// # Parameters
///
/// * `count` - Length of the filtered list
/// * `page_size` - Books per page
/// * `page` - 1-based page number; page 0 yields an empty range
///
/// # Returns
///
/// A range that is always valid for slicing a list of `count` items. Pages
/// past the end give an empty range at `count`.
///
/// # Examples
///
/// ```
/// use booklist::domain::pagination::{page_range, PageSize};
///
/// assert_eq!(page_range(45, PageSize::Twenty, 3), 40..45);
/// assert_eq!(page_range(45, PageSize::Twenty, 4), 45..45);
/// ```
#[must_use]
pub fn page_range(count: usize, page_size: PageSize, page: usize) -> Range<usize> {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size).min(count);
    let end = page.saturating_mul(size).min(count);
    start..end.max(start)
}

/// The items shown on `page`. See [`page_range`] for the bounds.
#[must_use]
pub fn paginate<T>(items: &[T], page_size: PageSize, page: usize) -> &[T] {
    &items[page_range(items.len(), page_size, page)]
}
