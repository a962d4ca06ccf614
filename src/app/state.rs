//! Application state management and view model computation.
//!
//! [`AppState`] owns the loaded catalog, the [`ViewState`] driven by the
//! reducer, and the purely visual bits (input mode, row cursor, theme). The
//! filtered list is cached and recomputed only when the reducer changes
//! something that affects filtering.
//!
//! # Example
//!
//! ```
//! use booklist::app::AppState;
//! use booklist::domain::{Book, PageSize};
//! use booklist::ui::Theme;
//!
//! let mut state = AppState::new("/host/books.json", PageSize::Twenty, Theme::default());
//! state.set_books(vec![Book::new("Emma", "Jane Austen", "United Kingdom", "English", 1815, 474)]);
//!
//! let vm = state.compute_viewmodel(24, 100);
//! assert_eq!(vm.header.title, " List of Books (1) ");
//! ```

use super::modes::{FormField, InputMode};
use super::reducer::{reduce, ViewEvent, ViewState};
use crate::domain::filter::{self, match_ranges};
use crate::domain::pagination::{self, PageSize};
use crate::domain::Book;
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    pager_window, BookRow, ColumnLayout, EmptyState, FilterBarInfo, FilterField, FooterInfo,
    HeaderInfo, PagerInfo, UIViewModel,
};

/// Message shown when no book passes the filters.
pub const EMPTY_MESSAGE: &str = "No books match the current filters.";

/// Rows used by everything except the table body: blank line, header,
/// two filter lines, table header, pager, footer and three borders.
const CHROME_ROWS: usize = 11;

/// Columns kept free on the pager line for the "Page X of Y" label.
const PAGER_LABEL_WIDTH: usize = 24;

/// Progress of the one-shot catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Waiting for permissions.
    #[default]
    Idle,
    /// Request posted to the worker.
    Requested,
    Loaded,
    /// Load failed; the list stays empty.
    Failed,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Full catalog in file order.
    pub books: Vec<Book>,

    /// Books passing the current filters, in catalog order.
    ///
    /// Recomputed by [`AppState::apply_filters`].
    pub filtered_books: Vec<Book>,

    /// Filters, search and pagination, mutated only through [`AppState::dispatch`].
    pub view: ViewState,

    pub input_mode: InputMode,

    /// Zero-based row cursor within the current page.
    pub cursor: usize,

    /// Digits typed in the go-to-page field. Not part of [`ViewState`]
    /// because nothing is filtered or paged until the entry is confirmed.
    pub page_input: String,

    pub load_status: LoadStatus,

    /// Sandbox path the worker reads the catalog from.
    pub catalog_path: String,

    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state waiting for the catalog.
    #[must_use]
    pub fn new(catalog_path: impl Into<String>, page_size: PageSize, theme: Theme) -> Self {
        Self {
            books: vec![],
            filtered_books: vec![],
            view: ViewState::with_page_size(page_size),
            input_mode: InputMode::Normal,
            cursor: 0,
            page_input: String::new(),
            load_status: LoadStatus::Idle,
            catalog_path: catalog_path.into(),
            theme,
        }
    }

    /// Replaces the catalog and refilters it.
    pub fn set_books(&mut self, books: Vec<Book>) {
        self.books = books;
        self.cursor = 0;
        self.apply_filters();
    }

    /// Runs the reducer and refreshes derived state.
    ///
    /// Returns `false` when the event left the view state unchanged.
    pub fn dispatch(&mut self, event: ViewEvent) -> bool {
        let next = reduce(&self.view, event);
        if next == self.view {
            return false;
        }

        let refilter = self.view.filters_differ(&next);
        let page_moved = refilter
            || next.current_page != self.view.current_page
            || next.page_size != self.view.page_size;

        self.view = next;

        if page_moved {
            self.cursor = 0;
        }
        if refilter {
            self.apply_filters();
        }

        true
    }

    /// Recomputes `filtered_books` from the catalog and the view state.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            total_books = self.books.len(),
            search_armed = self.view.search_armed
        )
        .entered();

        self.filtered_books = filter::filter_books(
            &self.books,
            &self.view.criteria,
            self.view.title_search(),
        )
        .into_iter()
        .cloned()
        .collect();

        self.clamp_cursor();

        tracing::debug!(filtered_count = self.filtered_books.len(), "filters applied");
    }

    /// Number of pages for the filtered list.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered_books.len(), self.view.page_size)
    }

    /// Books on the current page. Empty for a page past the end.
    #[must_use]
    pub fn visible_books(&self) -> &[Book] {
        pagination::paginate(
            &self.filtered_books,
            self.view.page_size,
            self.view.current_page,
        )
    }

    /// Current text of an editable field.
    #[must_use]
    pub fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::Country => &self.view.criteria.country,
            FormField::Language => &self.view.criteria.language,
            FormField::Search => &self.view.search_text,
            FormField::Page => &self.page_input,
        }
    }

    /// Moves the row cursor down, wrapping to the top of the page.
    pub fn move_cursor_down(&mut self) {
        let len = self.visible_books().len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Moves the row cursor up, wrapping to the bottom of the page.
    pub fn move_cursor_up(&mut self) {
        let len = self.visible_books().len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_books().len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    /// Computes a renderable view model for a pane of `rows` by `cols`.
    ///
    /// Only as many rows as fit are included; the window follows the cursor
    /// the same way a long list scrolls.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let columns = ColumnLayout::for_width(cols);
        let visible = self.visible_books();
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut window_start = self.cursor.saturating_sub(available_rows / 2).min(visible.len());
        let window_end = (window_start + available_rows).min(visible.len());
        if window_end - window_start < available_rows && visible.len() >= available_rows {
            window_start = window_end.saturating_sub(available_rows);
        }

        let needle = self
            .view
            .search_armed
            .then_some(self.view.search_text.as_str());

        let book_rows = visible[window_start..window_end]
            .iter()
            .enumerate()
            .map(|(offset, book)| {
                Self::compute_book_row(book, window_start + offset == self.cursor, columns, needle)
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            rows: book_rows,
            columns,
            pager: self.compute_pager(cols),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
        }
    }

    fn compute_book_row(
        book: &Book,
        is_selected: bool,
        columns: ColumnLayout,
        needle: Option<&str>,
    ) -> BookRow {
        let title = truncate(&book.title, columns.title);

        let shown = title.chars().count();
        let shown = if title == book.title { shown } else { shown.saturating_sub(1) };
        let highlight_ranges = needle
            .map(|n| match_ranges(&book.title, n))
            .unwrap_or_default()
            .into_iter()
            .filter(|&(start, _)| start < shown)
            .map(|(start, end)| (start, end.min(shown)))
            .collect();

        BookRow {
            title,
            author: truncate(&book.author, columns.author),
            country: truncate(&book.country, columns.country),
            language: truncate(&book.language, columns.language),
            year: book.year.to_string(),
            pages: book.pages.to_string(),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" List of Books ({}) ", self.filtered_books.len()),
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let editing = |field: FormField| self.input_mode == InputMode::Editing(field);
        let criteria = &self.view.criteria;

        let fields = vec![
            FilterField {
                label: FormField::Country.label(),
                value: criteria.country.clone(),
                key: 'c',
                is_active: editing(FormField::Country),
            },
            FilterField {
                label: FormField::Language.label(),
                value: criteria.language.clone(),
                key: 'l',
                is_active: editing(FormField::Language),
            },
            FilterField {
                label: "Pages",
                value: criteria.pages.map_or_else(|| "All".to_string(), |b| b.label().to_string()),
                key: 'p',
                is_active: false,
            },
            FilterField {
                label: "Year",
                value: criteria.year.map_or_else(|| "All".to_string(), |b| b.label().to_string()),
                key: 'y',
                is_active: false,
            },
            FilterField {
                label: "Per page",
                value: self.view.page_size.to_string(),
                key: 'z',
                is_active: false,
            },
        ];

        FilterBarInfo {
            fields,
            search: FilterField {
                label: FormField::Search.label(),
                value: self.view.search_text.clone(),
                key: '/',
                is_active: editing(FormField::Search),
            },
            search_armed: self.view.search_armed,
        }
    }

    fn compute_pager(&self, cols: usize) -> PagerInfo {
        let total_pages = self.total_pages();
        let current_page = self.view.current_page;

        let digits = total_pages.max(1).to_string().len();
        let button_width = digits + 3;
        let max_buttons = cols.saturating_sub(PAGER_LABEL_WIDTH) / button_width;

        let buttons = pager_window(total_pages, current_page, max_buttons);
        let has_more_before = buttons.first().is_some_and(|&first| first > 1);
        let has_more_after = buttons.last().is_some_and(|&last| last < total_pages);

        let page_input = (self.input_mode == InputMode::Editing(FormField::Page))
            .then(|| self.page_input.clone());

        PagerInfo {
            buttons,
            current_page,
            total_pages,
            has_more_before,
            has_more_after,
            page_input,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "c/l: country/language  /: search  s: run search  p/y/z: pages/year/per page  \
                 ←/→ 1-9 g: page  x: clear  q: quit"
            }
            InputMode::Editing(FormField::Search) => {
                "Type to edit search  Backspace: delete  Enter: run search  ESC: done"
            }
            InputMode::Editing(FormField::Page) => {
                "Type a page number  Backspace: delete  Enter: go  ESC: cancel"
            }
            InputMode::Editing(_) => "Type to filter  Backspace: delete  Enter/ESC: done",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.filtered_books.is_empty() {
            return None;
        }

        let subtitle = match self.load_status {
            LoadStatus::Idle | LoadStatus::Requested => "Loading catalog...",
            _ if !self.view.criteria.is_empty() || self.view.search_armed => {
                "Press x to clear the filters"
            }
            _ => "The catalog is empty",
        };

        Some(EmptyState {
            message: EMPTY_MESSAGE.to_string(),
            subtitle: subtitle.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::PagesBucket;
    use pretty_assertions::assert_eq;

    fn numbered(count: usize) -> Vec<Book> {
        (0..count)
            .map(|i| Book::new(format!("Book {i}"), "Author", "Norway", "Norwegian", 1600, 90))
            .collect()
    }

    fn loaded(books: Vec<Book>) -> AppState {
        let mut state = AppState::new("/host/books.json", PageSize::Twenty, Theme::default());
        state.set_books(books);
        state.load_status = LoadStatus::Loaded;
        state
    }

    #[test]
    fn forty_five_books_paginate_into_three_pages() {
        let mut state = loaded(numbered(45));
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.visible_books()[0].title, "Book 0");

        state.dispatch(ViewEvent::SelectPage(3));
        let titles: Vec<&str> = state.visible_books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Book 40", "Book 41", "Book 42", "Book 43", "Book 44"]);
    }

    #[test]
    fn dispatch_reports_unchanged_state() {
        let mut state = loaded(numbered(3));
        assert!(!state.dispatch(ViewEvent::SelectPage(1)));
        assert!(state.dispatch(ViewEvent::SetCountry("nor".into())));
        assert!(!state.dispatch(ViewEvent::SetCountry("nor".into())));
    }

    #[test]
    fn stale_page_renders_empty_table_without_empty_state() {
        let mut state = loaded(numbered(45));
        state.dispatch(ViewEvent::SelectPage(3));
        state.dispatch(ViewEvent::SetPageSize(PageSize::Hundred));
        state.dispatch(ViewEvent::SelectPage(2));

        let vm = state.compute_viewmodel(40, 120);
        assert!(vm.rows.is_empty());
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.pager.total_pages, 1);
    }

    #[test]
    fn empty_filter_result_shows_empty_state() {
        let mut state = loaded(numbered(5));
        state.dispatch(ViewEvent::SetCountry("peru".into()));

        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.header.title, " List of Books (0) ");
        let empty = vm.empty_state.expect("empty state");
        assert_eq!(empty.message, EMPTY_MESSAGE);
        assert_eq!(empty.subtitle, "Press x to clear the filters");
    }

    #[test]
    fn pending_load_shows_loading_subtitle() {
        let state = AppState::new("/host/books.json", PageSize::Twenty, Theme::default());
        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.empty_state.map(|e| e.subtitle), Some("Loading catalog...".to_string()));
    }

    #[test]
    fn armed_search_highlights_title_matches() {
        let mut state = loaded(vec![
            Book::new("The Odyssey", "Homer", "Greece", "Greek", -700, 374),
            Book::new("Ulysses", "James Joyce", "Ireland", "English", 1922, 228),
        ]);
        state.dispatch(ViewEvent::EditSearch("odys".into()));

        let idle = state.compute_viewmodel(40, 120);
        assert_eq!(idle.rows.len(), 2);
        assert!(idle.rows[0].highlight_ranges.is_empty());

        state.dispatch(ViewEvent::SubmitSearch);
        let armed = state.compute_viewmodel(40, 120);
        assert_eq!(armed.rows.len(), 1);
        assert_eq!(armed.rows[0].highlight_ranges, vec![(4, 8)]);
        assert!(armed.filter_bar.search_armed);
    }

    #[test]
    fn row_window_follows_cursor() {
        let mut state = loaded(numbered(20));
        for _ in 0..15 {
            state.move_cursor_down();
        }

        let vm = state.compute_viewmodel(CHROME_ROWS + 5, 120);
        assert_eq!(vm.rows.len(), 5);
        assert_eq!(vm.rows.iter().position(|r| r.is_selected), Some(2));
        assert_eq!(vm.rows[2].title, "Book 15");
    }

    #[test]
    fn cursor_wraps_within_current_page() {
        let mut state = loaded(numbered(3));
        state.move_cursor_up();
        assert_eq!(state.cursor, 2);
        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn page_change_resets_cursor() {
        let mut state = loaded(numbered(45));
        state.move_cursor_down();
        state.dispatch(ViewEvent::SelectPage(2));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn filter_bar_reflects_selects_and_active_field() {
        let mut state = loaded(numbered(1));
        state.dispatch(ViewEvent::SetPagesBucket(Some(PagesBucket::UpTo100)));
        state.input_mode = InputMode::Editing(FormField::Language);

        let bar = state.compute_viewmodel(40, 120).filter_bar;
        let values: Vec<(&str, &str, bool)> = bar
            .fields
            .iter()
            .map(|f| (f.label, f.value.as_str(), f.is_active))
            .collect();
        assert_eq!(
            values,
            vec![
                ("Country", "", false),
                ("Language", "", true),
                ("Pages", "1-100", false),
                ("Year", "All", false),
                ("Per page", "20", false),
            ]
        );
    }

    #[test]
    fn pager_lists_every_page_when_it_fits() {
        let state = loaded(numbered(45));
        let pager = state.compute_viewmodel(40, 120).pager;
        assert_eq!(pager.buttons, vec![1, 2, 3]);
        assert!(!pager.has_more_before && !pager.has_more_after);
    }

    #[test]
    fn pager_windows_in_narrow_panes() {
        let mut state = AppState::new("/host/books.json", PageSize::Twenty, Theme::default());
        state.set_books(numbered(400));
        state.dispatch(ViewEvent::SelectPage(10));

        let pager = state.compute_viewmodel(40, PAGER_LABEL_WIDTH + 5 * 5).pager;
        assert_eq!(pager.buttons, vec![8, 9, 10, 11, 12]);
        assert!(pager.has_more_before && pager.has_more_after);
    }

    #[test]
    fn pager_shows_page_entry_only_while_editing() {
        let mut state = loaded(numbered(300));
        state.page_input = "12".to_string();
        assert_eq!(state.compute_viewmodel(40, 120).pager.page_input, None);

        state.input_mode = InputMode::Editing(FormField::Page);
        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.pager.page_input.as_deref(), Some("12"));
        assert!(vm.footer.keybindings.contains("page number"));
    }
}
