//! Domain layer for the Booklist plugin.
//!
//! Core types and pure rules, free of Zellij APIs and I/O.
//!
//! # Organization
//!
//! - [`book`]: the catalog record
//! - [`filter`]: bucket types and match predicates
//! - [`pagination`]: page sizes and slicing
//! - [`error`]: error type and result alias

pub mod book;
pub mod error;
pub mod filter;
pub mod pagination;

pub use book::Book;
pub use error::{BooklistError, Result};
pub use filter::{FilterCriteria, PagesBucket, TitleSearch, YearBucket};
pub use pagination::PageSize;
