//! Shared rendering utilities.
//!
//! All width arithmetic here counts `char`s, not bytes, so titles with
//! accents or non-Latin scripts never get sliced mid-character.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `width` characters, ending in `…` when cut.
///
/// # Examples
///
/// ```
/// use booklist::ui::helpers::truncate;
///
/// assert_eq!(truncate("Don Quixote", 20), "Don Quixote");
/// assert_eq!(truncate("Don Quixote", 6), "Don Q…");
/// assert_eq!(truncate("Don Quixote", 0), "");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Spaces needed to pad `text` to `width` characters.
#[must_use]
pub fn padding(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.chars().count()))
}

/// Prints `text` with the given character ranges in match colors.
///
/// Ranges are `(start, end)` character indices, end exclusive, ascending and
/// non-overlapping. On a selected row the selection colors are restored after
/// each highlighted run so the row background stays continuous.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let before: String = chars[current_pos..start].iter().collect();
        print!("{before}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start..end].iter().collect();
        print!("{highlighted}");
        print!("{}", Theme::reset());

        if is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
