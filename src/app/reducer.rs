//! Pure view-state transitions.
//!
//! [`reduce`] takes the previous [`ViewState`] and one [`ViewEvent`] and
//! returns the next state. It has no access to the book list, the terminal or
//! Zellij, which keeps every filter/search/pagination rule testable on its own.
//!
//! Page resets: every filter change, a page size change, a search submission
//! and clearing the filters send the view back to page 1. Editing the search
//! text only disarms the search. Selecting a page is taken as given (floored
//! at 1); it is never reclamped against the filtered count.

use crate::domain::filter::{FilterCriteria, PagesBucket, TitleSearch, YearBucket};
use crate::domain::PageSize;
use serde::{Deserialize, Serialize};

/// Filter, search and pagination state of the catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub criteria: FilterCriteria,
    pub search_text: String,
    /// Set by an explicit search action, cleared by any edit of `search_text`.
    pub search_armed: bool,
    pub page_size: PageSize,
    /// 1-based.
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_page_size(PageSize::default())
    }
}

impl ViewState {
    /// Initial state: no filters, idle search, first page.
    #[must_use]
    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            search_text: String::new(),
            search_armed: false,
            page_size,
            current_page: 1,
        }
    }

    /// The search as seen by the filter predicate.
    #[must_use]
    pub fn title_search(&self) -> TitleSearch<'_> {
        TitleSearch {
            text: &self.search_text,
            armed: self.search_armed,
        }
    }

    /// True if `other` would filter the catalog differently.
    #[must_use]
    pub fn filters_differ(&self, other: &Self) -> bool {
        self.criteria != other.criteria
            || self.search_armed != other.search_armed
            || (self.search_armed && self.search_text != other.search_text)
    }
}

/// User intents that change the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SetCountry(String),
    SetLanguage(String),
    SetPagesBucket(Option<PagesBucket>),
    SetYearBucket(Option<YearBucket>),
    /// New search text; returns the search to idle.
    EditSearch(String),
    /// The search action; arms the search with the current text.
    SubmitSearch,
    SetPageSize(PageSize),
    /// Jump to a page number (values below 1 become 1).
    SelectPage(usize),
    /// Drop every filter and the search text.
    ClearFilters,
}

/// Computes the next view state.
///
/// # Examples
///
/// ```
/// use booklist::app::reducer::{reduce, ViewEvent, ViewState};
///
/// let typed = reduce(&ViewState::default(), ViewEvent::EditSearch("odyssey".into()));
/// assert!(!typed.search_armed);
///
/// let searched = reduce(&typed, ViewEvent::SubmitSearch);
/// assert!(searched.search_armed);
/// assert_eq!(searched.current_page, 1);
/// ```
#[must_use]
pub fn reduce(prev: &ViewState, event: ViewEvent) -> ViewState {
    let mut next = prev.clone();

    match event {
        ViewEvent::SetCountry(country) => {
            next.criteria.country = country;
            next.current_page = 1;
        }
        ViewEvent::SetLanguage(language) => {
            next.criteria.language = language;
            next.current_page = 1;
        }
        ViewEvent::SetPagesBucket(bucket) => {
            next.criteria.pages = bucket;
            next.current_page = 1;
        }
        ViewEvent::SetYearBucket(bucket) => {
            next.criteria.year = bucket;
            next.current_page = 1;
        }
        ViewEvent::EditSearch(text) => {
            next.search_text = text;
            next.search_armed = false;
        }
        ViewEvent::SubmitSearch => {
            next.search_armed = true;
            next.current_page = 1;
        }
        ViewEvent::SetPageSize(page_size) => {
            next.page_size = page_size;
            next.current_page = 1;
        }
        ViewEvent::SelectPage(page) => {
            next.current_page = page.max(1);
        }
        ViewEvent::ClearFilters => {
            next.criteria = FilterCriteria::default();
            next.search_text.clear();
            next.search_armed = false;
            next.current_page = 1;
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn on_page(page: usize) -> ViewState {
        ViewState {
            current_page: page,
            ..ViewState::default()
        }
    }

    #[test]
    fn filter_and_page_size_changes_reset_to_first_page() {
        let events = [
            ViewEvent::SetCountry("ita".into()),
            ViewEvent::SetLanguage("ital".into()),
            ViewEvent::SetPagesBucket(Some(PagesBucket::UpTo200)),
            ViewEvent::SetYearBucket(Some(YearBucket::Sixteenth)),
            ViewEvent::SetPageSize(PageSize::Hundred),
            ViewEvent::SubmitSearch,
            ViewEvent::ClearFilters,
        ];

        for event in events {
            let next = reduce(&on_page(3), event.clone());
            assert_eq!(next.current_page, 1, "{event:?} should reset the page");
        }
    }

    #[test]
    fn editing_search_disarms_without_resetting_page() {
        let armed = ViewState {
            search_text: "odyssey".into(),
            search_armed: true,
            current_page: 2,
            ..ViewState::default()
        };

        let edited = reduce(&armed, ViewEvent::EditSearch("odysse".into()));

        assert!(!edited.search_armed);
        assert_eq!(edited.search_text, "odysse");
        assert_eq!(edited.current_page, 2);
    }

    #[test]
    fn search_state_machine_goes_idle_armed_idle() {
        let idle = reduce(&ViewState::default(), ViewEvent::EditSearch("iliad".into()));
        assert!(!idle.search_armed);

        let armed = reduce(&idle, ViewEvent::SubmitSearch);
        assert!(armed.search_armed);
        assert_eq!(armed.search_text, "iliad");

        let idle_again = reduce(&armed, ViewEvent::EditSearch("iliads".into()));
        assert!(!idle_again.search_armed);
    }

    #[test]
    fn select_page_is_taken_as_given() {
        assert_eq!(reduce(&on_page(1), ViewEvent::SelectPage(40)).current_page, 40);
        assert_eq!(reduce(&on_page(4), ViewEvent::SelectPage(0)).current_page, 1);
    }

    #[test]
    fn reducer_leaves_prior_state_untouched() {
        let before = on_page(2);
        let snapshot = before.clone();
        let _ = reduce(&before, ViewEvent::SetCountry("peru".into()));
        assert_eq!(before, snapshot);
    }

    #[test]
    fn clear_filters_keeps_page_size() {
        let busy = ViewState {
            criteria: FilterCriteria {
                country: "x".into(),
                language: "y".into(),
                pages: Some(PagesBucket::UpTo100),
                year: Some(YearBucket::Eighteenth),
            },
            search_text: "z".into(),
            search_armed: true,
            page_size: PageSize::Fifty,
            current_page: 5,
        };

        assert_eq!(
            reduce(&busy, ViewEvent::ClearFilters),
            ViewState::with_page_size(PageSize::Fifty)
        );
    }

    #[test]
    fn unarmed_text_edits_do_not_change_filtering() {
        let a = reduce(&ViewState::default(), ViewEvent::EditSearch("a".into()));
        let b = reduce(&a, ViewEvent::EditSearch("ab".into()));
        assert!(!a.filters_differ(&b));
        assert!(b.filters_differ(&reduce(&b, ViewEvent::SubmitSearch)));
    }
}
