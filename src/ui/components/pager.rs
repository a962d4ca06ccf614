//! Pager renderer: numbered page buttons plus a "Page X of Y" label, or the
//! go-to-page prompt while it is open.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PagerInfo;

/// Renders the pager line. Returns the next free row.
pub fn render_pager(row: usize, pager: &PagerInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(" ");
    let mut used = 1;

    if pager.has_more_before {
        print!("{}… {}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        used += 2;
    }

    for &page in &pager.buttons {
        let button = format!(" {page} ");
        if page == pager.current_page {
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.accent));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{button}{} ", Theme::reset());
        used += button.len() + 1;
    }

    if pager.has_more_after {
        print!("{}…{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        used += 1;
    }

    let (label, color) = match &pager.page_input {
        Some(input) => (
            format!("Go to page: {input}_ of {} ", pager.total_pages),
            &theme.colors.field_active,
        ),
        None => (
            format!("Page {} of {} ", pager.current_page, pager.total_pages),
            &theme.colors.text_dim,
        ),
    };
    let label_len = label.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(used + label_len)));
    if used + label_len <= cols {
        print!("{}{label}{}", Theme::fg(color), Theme::reset());
    }

    row + 1
}
