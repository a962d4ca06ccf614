//! Input mode state for the catalog view.
//!
//! The plugin is either in normal mode, where single keys trigger commands,
//! or editing one of the text fields, where keys are typed into it.

/// Text fields of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Country substring filter.
    Country,
    /// Language substring filter.
    Language,
    /// Title search text. Typing here disarms the search.
    Search,
    /// Page number to jump to. Only digits are accepted.
    Page,
}

impl FormField {
    /// Label drawn next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::Language => "Language",
            Self::Search => "Search",
            Self::Page => "Go to page",
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands: c/l// to edit, p/y/z to cycle selects, arrows and g to page.
    #[default]
    Normal,

    /// Printable keys edit the given field; Enter or Esc return to normal.
    Editing(FormField),
}
