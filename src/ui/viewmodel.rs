//! View model types representing renderable UI state.
//!
//! View models are created by [`AppState::compute_viewmodel`] and consumed by
//! the renderer. They carry display-ready strings, highlight ranges and
//! selection flags but no filtering logic.
//!
//! [`AppState::compute_viewmodel`]: crate::app::AppState::compute_viewmodel

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub filter_bar: FilterBarInfo,

    /// Rows of the current page that fit in the pane.
    pub rows: Vec<BookRow>,

    /// Column widths for `rows`, derived from the pane width.
    pub columns: ColumnLayout,

    pub pager: PagerInfo,
    pub footer: FooterInfo,

    /// Present iff the filtered list is empty.
    pub empty_state: Option<EmptyState>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, e.g. `" List of Books (42) "`.
    pub title: String,
}

/// One labelled field of the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterField {
    pub label: &'static str,

    /// Current value; selects show `All` when unset.
    pub value: String,

    /// Key that edits or cycles this field.
    pub key: char,

    /// True while the field is being edited.
    pub is_active: bool,
}

/// Filter bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    /// Country, language, pages, year and page size, in display order.
    pub fields: Vec<FilterField>,

    pub search: FilterField,

    /// Whether the search text currently filters the list.
    pub search_armed: bool,
}

/// Display information for a single book row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub title: String,
    pub author: String,
    pub country: String,
    pub language: String,
    pub year: String,
    pub pages: String,

    /// Whether the row cursor is on this row.
    pub is_selected: bool,

    /// Character ranges of the title to highlight as search matches.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Widths of the text columns. Year and pages use [`ColumnLayout::NUMBER_WIDTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnLayout {
    pub title: usize,
    pub author: usize,
    pub country: usize,
    pub language: usize,
}

impl ColumnLayout {
    pub const NUMBER_WIDTH: usize = 5;

    /// Single-space gaps between the six columns plus the leading margin.
    const GAPS: usize = 6;

    /// Splits `cols` between the text columns, 40/25/18/17 percent.
    #[must_use]
    pub const fn for_width(cols: usize) -> Self {
        let text = cols.saturating_sub(2 * Self::NUMBER_WIDTH + Self::GAPS);
        let title = text * 40 / 100;
        let author = text * 25 / 100;
        let country = text * 18 / 100;
        Self {
            title,
            author,
            country,
            language: text - title - author - country,
        }
    }
}

/// Pager display information.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PagerInfo {
    /// Page numbers to draw as buttons, ascending.
    pub buttons: Vec<usize>,
    pub current_page: usize,
    pub total_pages: usize,

    /// True when pages below the first button exist.
    pub has_more_before: bool,

    /// True when pages above the last button exist.
    pub has_more_after: bool,

    /// Digits typed so far while the go-to-page field is open.
    pub page_input: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Chooses which page buttons to show.
///
/// All pages are shown when they fit in `max_buttons`. Otherwise the window is
/// centred on `current` and slid inward at either end. A `current` past the
/// last page pins the window to the end.
///
/// # Examples
///
/// ```
/// use booklist::ui::viewmodel::pager_window;
///
/// assert_eq!(pager_window(3, 1, 9), vec![1, 2, 3]);
/// assert_eq!(pager_window(20, 10, 5), vec![8, 9, 10, 11, 12]);
/// assert_eq!(pager_window(20, 1, 5), vec![1, 2, 3, 4, 5]);
/// ```
#[must_use]
pub fn pager_window(total: usize, current: usize, max_buttons: usize) -> Vec<usize> {
    let max_buttons = max_buttons.max(1);
    if total <= max_buttons {
        return (1..=total).collect();
    }

    let current = current.clamp(1, total);
    let start = current.saturating_sub(max_buttons / 2).max(1);
    let end = (start + max_buttons - 1).min(total);
    let start = end + 1 - max_buttons;

    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pager_window_slides_at_the_end() {
        assert_eq!(pager_window(20, 20, 5), vec![16, 17, 18, 19, 20]);
        assert_eq!(pager_window(20, 19, 5), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn pager_window_handles_stale_current_page() {
        assert_eq!(pager_window(10, 40, 3), vec![8, 9, 10]);
        assert_eq!(pager_window(2, 40, 3), vec![1, 2]);
    }

    #[test]
    fn pager_window_without_pages_is_empty() {
        assert!(pager_window(0, 1, 5).is_empty());
    }

    #[test]
    fn pager_window_shows_at_least_one_button() {
        assert_eq!(pager_window(4, 3, 0), vec![3]);
    }

    #[test]
    fn column_layout_uses_the_whole_width() {
        let layout = ColumnLayout::for_width(116);
        let used = layout.title
            + layout.author
            + layout.country
            + layout.language
            + 2 * ColumnLayout::NUMBER_WIDTH
            + 6;
        assert_eq!(used, 116);
        assert_eq!(layout.title, 40);
    }

    #[test]
    fn column_layout_collapses_in_tiny_panes() {
        assert_eq!(ColumnLayout::for_width(10), ColumnLayout::default());
    }
}
