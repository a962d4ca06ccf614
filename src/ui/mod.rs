//! Terminal rendering layer.
//!
//! - [`viewmodel`]: display-ready state computed by `AppState`
//! - [`renderer`]: entry point called from the plugin's `render`
//! - [`components`]: header, filter bar, table, pager, footer, empty state
//! - [`helpers`]: cursor positioning, truncation, match highlighting
//! - [`theme`]: Catppuccin and TOML themes, ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BookRow, ColumnLayout, EmptyState, FilterBarInfo, FilterField, FooterInfo, HeaderInfo,
    PagerInfo, UIViewModel,
};
