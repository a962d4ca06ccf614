//! Filter buckets and per-book match predicates.
//!
//! Every clause is a small pure function so it can be checked in isolation.
//! [`matches`] combines them with a logical AND.
//!
//! The bucket checks reproduce the catalog's historical behavior exactly:
//! page buckets only test the upper bound, so a 10-page book passes
//! `"101-200"`. Year buckets test both ends of an inclusive century range.

use crate::domain::book::Book;
use crate::domain::error::{BooklistError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Page-count bucket offered by the pages filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PagesBucket {
    UpTo100,
    UpTo200,
    UpTo300,
}

impl PagesBucket {
    /// All buckets in display order.
    pub const ALL: [Self; 3] = [Self::UpTo100, Self::UpTo200, Self::UpTo300];

    /// The only bound that is checked. Lower bounds are ignored.
    #[must_use]
    pub const fn upper_bound(self) -> u32 {
        match self {
            Self::UpTo100 => 100,
            Self::UpTo200 => 200,
            Self::UpTo300 => 300,
        }
    }

    /// Text of the select option, also accepted by `FromStr`.
    ///
    /// ```
    /// use booklist::domain::PagesBucket;
    ///
    /// assert_eq!(PagesBucket::UpTo200.label(), "101-200");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpTo100 => "1-100",
            Self::UpTo200 => "101-200",
            Self::UpTo300 => "201-300",
        }
    }
}

/// Century bucket offered by the year filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearBucket {
    Sixteenth,
    Seventeenth,
    Eighteenth,
}

impl YearBucket {
    /// All buckets in display order.
    pub const ALL: [Self; 3] = [Self::Sixteenth, Self::Seventeenth, Self::Eighteenth];

    /// Inclusive year range covered by the century.
    #[must_use]
    pub const fn range(self) -> (i32, i32) {
        match self {
            Self::Sixteenth => (1501, 1600),
            Self::Seventeenth => (1601, 1700),
            Self::Eighteenth => (1701, 1800),
        }
    }

    /// Text of the select option, also accepted by `FromStr`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sixteenth => "16th century",
            Self::Seventeenth => "17th century",
            Self::Eighteenth => "18th century",
        }
    }
}

macro_rules! bucket_text_impls {
    ($bucket:ty, $what:literal) => {
        impl fmt::Display for $bucket {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $bucket {
            type Err = BooklistError;

            fn from_str(s: &str) -> Result<Self> {
                Self::ALL
                    .into_iter()
                    .find(|bucket| bucket.label() == s)
                    .ok_or_else(|| BooklistError::Config(format!("unknown {} bucket: {s:?}", $what)))
            }
        }
    };
}

bucket_text_impls!(PagesBucket, "pages");
bucket_text_impls!(YearBucket, "year");

/// Parses a select-box value where `""` means "no constraint".
///
/// # Errors
///
/// Returns [`BooklistError::Config`] if the text is neither empty nor a known
/// bucket label.
///
/// # Examples
///
/// ```
/// use booklist::domain::filter::{parse_bucket, PagesBucket};
///
/// assert_eq!(parse_bucket::<PagesBucket>("")?, None);
/// assert_eq!(parse_bucket::<PagesBucket>("101-200")?, Some(PagesBucket::UpTo200));
/// # Ok::<(), booklist::BooklistError>(())
/// ```
pub fn parse_bucket<B>(text: &str) -> Result<Option<B>>
where
    B: FromStr<Err = BooklistError>,
{
    if text.is_empty() {
        Ok(None)
    } else {
        text.parse().map(Some)
    }
}

/// Steps through `None → ALL[0] → … → ALL[n-1] → None`.
fn cycle<B: Copy + PartialEq>(current: Option<B>, all: &[B]) -> Option<B> {
    match current {
        None => all.first().copied(),
        Some(bucket) => all
            .iter()
            .position(|b| *b == bucket)
            .and_then(|i| all.get(i + 1))
            .copied(),
    }
}

/// Next pages bucket in the select-box order, wrapping back to "All".
#[must_use]
pub fn next_pages_bucket(current: Option<PagesBucket>) -> Option<PagesBucket> {
    cycle(current, &PagesBucket::ALL)
}

/// Next year bucket in the select-box order, wrapping back to "All".
#[must_use]
pub fn next_year_bucket(current: Option<YearBucket>) -> Option<YearBucket> {
    cycle(current, &YearBucket::ALL)
}

/// Filter criteria. Empty strings and `None` buckets impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub country: String,
    pub language: String,
    pub pages: Option<PagesBucket>,
    pub year: Option<YearBucket>,
}

impl FilterCriteria {
    /// True when no field constrains the catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.country.is_empty()
            && self.language.is_empty()
            && self.pages.is_none()
            && self.year.is_none()
    }
}

/// Title search as seen by the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleSearch<'a> {
    /// Search field contents.
    pub text: &'a str,
    /// Set by the search action, cleared by any edit of `text`.
    pub armed: bool,
}

/// Case-insensitive substring test. An empty needle matches everything.
///
/// # Examples
///
/// ```
/// use booklist::domain::filter::contains_ignore_case;
///
/// assert!(contains_ignore_case("England", "eng"));
/// assert!(contains_ignore_case("England", ""));
/// assert!(!contains_ignore_case("France", "eng"));
/// ```
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Country clause: empty criterion or case-insensitive substring.
#[must_use]
pub fn country_matches(book: &Book, country: &str) -> bool {
    contains_ignore_case(&book.country, country)
}

/// Language clause: empty criterion or case-insensitive substring.
#[must_use]
pub fn language_matches(book: &Book, language: &str) -> bool {
    contains_ignore_case(&book.language, language)
}

/// Pages clause: no bucket, or pages at most the bucket's upper bound.
#[must_use]
pub fn pages_match(book: &Book, bucket: Option<PagesBucket>) -> bool {
    bucket.map_or(true, |b| book.pages <= b.upper_bound())
}

/// Year clause: no bucket, or year inside the inclusive century range.
#[must_use]
pub fn year_matches(book: &Book, bucket: Option<YearBucket>) -> bool {
    bucket.map_or(true, |b| {
        let (first, last) = b.range();
        (first..=last).contains(&book.year)
    })
}

/// Search clause: unarmed searches pass everything. An armed search needs a
/// non-empty term contained in the title, so arming with an empty term
/// hides every book.
#[must_use]
pub fn search_matches(book: &Book, search: TitleSearch<'_>) -> bool {
    !search.armed || (!search.text.is_empty() && contains_ignore_case(&book.title, search.text))
}

/// All clauses combined.
#[must_use]
pub fn matches(book: &Book, criteria: &FilterCriteria, search: TitleSearch<'_>) -> bool {
    country_matches(book, &criteria.country)
        && language_matches(book, &criteria.language)
        && pages_match(book, criteria.pages)
        && year_matches(book, criteria.year)
        && search_matches(book, search)
}

/// Books passing every clause, in catalog order.
#[must_use]
pub fn filter_books<'a>(
    books: &'a [Book],
    criteria: &FilterCriteria,
    search: TitleSearch<'_>,
) -> Vec<&'a Book> {
    books
        .iter()
        .filter(|book| matches(book, criteria, search))
        .collect()
}

/// Character ranges `(start, end)` of every case-insensitive occurrence of
/// `needle` in `text`, for highlighting.
///
/// Returns nothing when lowercasing changes the character count of either
/// string, since positions would no longer line up with the original text.
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    if needle.is_empty() {
        return vec![];
    }

    let hay: Vec<char> = text.to_lowercase().chars().collect();
    let pat: Vec<char> = needle.to_lowercase().chars().collect();
    if hay.len() != text.chars().count() || pat.len() != needle.chars().count() || pat.len() > hay.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + pat.len() <= hay.len() {
        if hay[i..i + pat.len()] == pat[..] {
            ranges.push((i, i + pat.len()));
            i += pat.len();
        } else {
            i += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const IDLE: TitleSearch<'static> = TitleSearch { text: "", armed: false };

    fn book(title: &str, country: &str, language: &str, year: i32, pages: u32) -> Book {
        Book::new(title, "Author", country, language, year, pages)
    }

    fn with_pages(pages: u32) -> Book {
        book("t", "c", "l", 1900, pages)
    }

    fn with_year(year: i32) -> Book {
        book("t", "c", "l", year, 100)
    }

    #[test]
    fn empty_criteria_admit_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        for b in [
            book("Things Fall Apart", "Nigeria", "English", 1958, 209),
            book("Gilgamesh", "Sumer and Akkadian Empire", "Akkadian", -1700, 160),
            book("", "", "", 0, 0),
        ] {
            assert!(matches(&b, &criteria, IDLE));
        }
    }

    #[test]
    fn country_and_language_are_case_insensitive_substrings() {
        let b = book("Pride and Prejudice", "England", "English", 1813, 226);
        assert!(country_matches(&b, "eng"));
        assert!(country_matches(&b, "LAND"));
        assert!(!country_matches(&b, "france"));
        assert!(language_matches(&b, "glis"));
        assert!(!language_matches(&b, "french"));
    }

    #[test]
    fn pages_bucket_checks_upper_bound_only() {
        assert!(pages_match(&with_pages(100), Some(PagesBucket::UpTo100)));
        assert!(pages_match(&with_pages(5), Some(PagesBucket::UpTo100)));
        assert!(!pages_match(&with_pages(101), Some(PagesBucket::UpTo100)));

        assert!(pages_match(&with_pages(10), Some(PagesBucket::UpTo200)));
        assert!(pages_match(&with_pages(300), Some(PagesBucket::UpTo300)));
        assert!(!pages_match(&with_pages(301), Some(PagesBucket::UpTo300)));
        assert!(pages_match(&with_pages(5000), None));
    }

    #[test]
    fn year_bucket_is_inclusive_century() {
        let bucket = Some(YearBucket::Seventeenth);
        assert!(year_matches(&with_year(1601), bucket));
        assert!(year_matches(&with_year(1700), bucket));
        assert!(!year_matches(&with_year(1600), bucket));
        assert!(!year_matches(&with_year(1701), bucket));

        assert!(year_matches(&with_year(1501), Some(YearBucket::Sixteenth)));
        assert!(year_matches(&with_year(1800), Some(YearBucket::Eighteenth)));
        assert!(year_matches(&with_year(-500), None));
    }

    #[test]
    fn search_only_applies_when_armed() {
        let odyssey = book("The Odyssey", "Greece", "Greek", -700, 374);
        let iliad = book("The Iliad", "Greece", "Greek", -735, 608);

        let idle = TitleSearch { text: "odyssey", armed: false };
        assert!(search_matches(&odyssey, idle));
        assert!(search_matches(&iliad, idle));

        let armed = TitleSearch { text: "ODYSSEY", armed: true };
        assert!(search_matches(&odyssey, armed));
        assert!(!search_matches(&iliad, armed));
    }

    #[test]
    fn armed_empty_search_hides_everything() {
        let b = book("Anything", "c", "l", 1900, 10);
        assert!(!search_matches(&b, TitleSearch { text: "", armed: true }));
    }

    #[test]
    fn clauses_are_and_combined() {
        let books = vec![
            book("Don Quixote", "Spain", "Spanish", 1610, 1056),
            book("Hamlet", "England", "English", 1603, 432),
            book("Gulliver's Travels", "Ireland", "English", 1726, 178),
        ];
        let criteria = FilterCriteria {
            language: "english".into(),
            year: Some(YearBucket::Seventeenth),
            ..FilterCriteria::default()
        };

        let titles: Vec<&str> = filter_books(&books, &criteria, IDLE)
            .into_iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Hamlet"]);
    }

    #[test]
    fn bucket_labels_round_trip_through_parse() {
        for bucket in PagesBucket::ALL {
            assert_eq!(bucket.label().parse::<PagesBucket>().unwrap(), bucket);
        }
        assert_eq!(parse_bucket::<YearBucket>("18th century").unwrap(), Some(YearBucket::Eighteenth));
        assert_eq!(parse_bucket::<YearBucket>("").unwrap(), None);
        assert!(parse_bucket::<YearBucket>("19th century").is_err());
    }

    #[test]
    fn buckets_cycle_through_all_then_back_to_none() {
        let mut seen = vec![];
        let mut current = None;
        for _ in 0..4 {
            current = next_pages_bucket(current);
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                Some(PagesBucket::UpTo100),
                Some(PagesBucket::UpTo200),
                Some(PagesBucket::UpTo300),
                None
            ]
        );
        assert_eq!(next_year_bucket(Some(YearBucket::Eighteenth)), None);
    }

    #[test]
    fn match_ranges_find_every_occurrence() {
        assert_eq!(match_ranges("Banana", "an"), vec![(1, 3), (3, 5)]);
        assert_eq!(match_ranges("The Odyssey", "ODY"), vec![(4, 7)]);
        assert!(match_ranges("Hamlet", "").is_empty());
        assert!(match_ranges("Hamlet", "xyz").is_empty());
    }
}
