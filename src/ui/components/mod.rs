//! Composable UI component renderers.
//!
//! Each component prints its own rows with ANSI cursor positioning and
//! returns the next free row, so the layout functions read top to bottom.
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Filter bar - 2 lines]
//! [Border]
//! [Table headers]
//! [Table rows | empty state]
//! [padding]
//! [Pager]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod filters;
mod footer;
mod header;
mod pager;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use filters::render_filter_bar;
use footer::render_footer;
use header::render_header;
use pager::render_pager;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line. Returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full catalog layout.
pub fn render_catalog(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_table_headers(current_row, vm.columns, theme, cols);

    let _current_row = match &vm.empty_state {
        Some(empty) => render_empty_state(current_row, empty, theme, cols),
        None => render_table_rows(current_row, &vm.rows, vm.columns, theme, cols),
    };

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let pager_row = border_row.saturating_sub(1);

    render_pager(pager_row, &vm.pager, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
