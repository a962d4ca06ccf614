//! Book table renderer.
//!
//! Six columns: title, author, country, language, year and pages. Text
//! columns are sized by [`ColumnLayout`]; the numeric ones are right-aligned
//! at a fixed width.

use crate::ui::helpers::{self, padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BookRow, ColumnLayout};

const NUM: usize = ColumnLayout::NUMBER_WIDTH;

/// Renders the bold column headings. Returns the next free row.
pub fn render_table_headers(row: usize, columns: ColumnLayout, theme: &Theme, cols: usize) -> usize {
    let line = format!(
        " {} {} {} {} {:>num$} {:>num$}",
        fit("TITLE", columns.title),
        fit("AUTHOR", columns.author),
        fit("COUNTRY", columns.country),
        fit("LANGUAGE", columns.language),
        "YEAR",
        "PAGES",
        num = NUM,
    );

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{line}{}", padding(&line, cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders each row on consecutive lines. Returns the next free row.
pub fn render_table_rows(
    row: usize,
    rows: &[BookRow],
    columns: ColumnLayout,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for book in rows {
        current_row = render_table_row(current_row, book, columns, theme, cols);
    }
    current_row
}

fn fit(text: &str, width: usize) -> String {
    let cut = helpers::truncate(text, width);
    let pad = padding(&cut, width);
    cut + &pad
}

/// Selection colors cover the whole line; match highlights apply to the
/// title only.
fn render_table_row(
    row: usize,
    book: &BookRow,
    columns: ColumnLayout,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    if book.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(" ");
    helpers::render_highlighted_text(&book.title, &book.highlight_ranges, theme, book.is_selected);
    print!("{}", padding(&book.title, columns.title));

    let rest = format!(
        " {} {} {} {:>num$} {:>num$}",
        fit(&book.author, columns.author),
        fit(&book.country, columns.country),
        fit(&book.language, columns.language),
        book.year,
        book.pages,
        num = NUM,
    );
    print!("{rest}");

    let line_len = 1 + columns.title.max(book.title.chars().count()) + rest.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
