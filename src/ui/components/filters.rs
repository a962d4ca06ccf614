//! Filter bar renderer.
//!
//! Two lines: the country/language/pages/year/page-size controls, then the
//! title search with its idle/armed marker.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FilterBarInfo, FilterField};

const FIELD_GAP: &str = "   ";
const EDIT_CURSOR: char = '▏';

/// Prints one field and returns its width in characters.
fn render_field(field: &FilterField, theme: &Theme) -> usize {
    let label = format!("{} {}: ", field.key, field.label);
    print!("{}{label}", Theme::fg(&theme.colors.text_dim));

    let mut width = label.chars().count() + field.value.chars().count();
    if field.is_active {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.field_active));
        print!("{}{EDIT_CURSOR}", field.value);
        width += 1;
    } else {
        print!("{}{}", Theme::fg(&theme.colors.text_normal), field.value);
    }

    print!("{}", Theme::reset());
    width
}

/// Renders both filter lines. Returns the next free row.
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(" ");
    let mut used = 1;
    for (i, field) in bar.fields.iter().enumerate() {
        if i > 0 {
            print!("{FIELD_GAP}");
            used += FIELD_GAP.len();
        }
        used += render_field(field, theme);
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    position_cursor(row + 1, 1);
    print!(" ");
    let mut used = 1 + render_field(&bar.search, theme);
    print!("{FIELD_GAP}");
    used += FIELD_GAP.len();

    let status = if bar.search_armed {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
        "● searching titles"
    } else {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        "○ press s to search"
    };
    print!("{status}{}", Theme::reset());
    used += status.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    row + 2
}
