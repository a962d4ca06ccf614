//! Booklist: a Zellij plugin for browsing a static book catalog.
//!
//! The catalog is a JSON array of books loaded once, in a worker thread, when
//! the plugin is granted host filesystem access. The plugin then filters it by
//! country, language, page-count bucket and century, searches titles on
//! demand, and paginates the result at 20, 50 or 100 books per page.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, permissions
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, actions                          │
//! │  - Pure view-state reducer                          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog       │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON source │   │ - One-shot    │
//! │ - Theming     │   │ - Source trait│   │   catalog load│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Book, filters, pagination, errors (domain/)      │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing + OpenTelemetry, OTLP JSON file export   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/booklist.wasm" {
//!         catalog_path "~/books.json"
//!         page_size "50"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Library usage
//!
//! ```
//! use booklist::worker::WorkerResponse;
//! use booklist::{handle_event, initialize, Book, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::PermissionsGranted)?;
//! handle_event(
//!     &mut state,
//!     &Event::WorkerResponse(WorkerResponse::CatalogLoaded {
//!         books: vec![Book::new("Pedro Páramo", "Juan Rulfo", "Mexico", "Spanish", 1955, 124)],
//!     }),
//! )?;
//!
//! handle_event(&mut state, &Event::CyclePagesBucket)?;
//! handle_event(&mut state, &Event::CyclePagesBucket)?;
//! assert_eq!(state.filtered_books.len(), 1);
//! # Ok::<(), booklist::BooklistError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{Book, BooklistError, PageSize, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Catalog file read when `catalog_path` is not configured.
pub const DEFAULT_CATALOG_PATH: &str = "books.json";

/// Plugin configuration parsed from the Zellij KDL block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog location as configured; resolved against `/host` at startup.
    pub catalog_path: String,

    /// Initial page size.
    pub page_size: PageSize,

    /// Built-in theme name; ignored when `theme_file` is set.
    pub theme_name: Option<String>,

    /// TOML theme file.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            page_size: PageSize::default(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses the plugin configuration, falling back to defaults for missing
    /// or invalid values.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let catalog_path = config
            .get("catalog_path")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or(defaults.catalog_path, String::from);

        let page_size = config.get("page_size").map_or(defaults.page_size, |raw| {
            raw.trim()
                .parse::<usize>()
                .map_err(|e| BooklistError::Config(format!("page_size {raw:?}: {e}")))
                .and_then(PageSize::try_from)
                .unwrap_or_else(|e| {
                    tracing::debug!(error = %e, "invalid page size, using default");
                    defaults.page_size
                })
        });

        Self {
            catalog_path,
            page_size,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config
                .get("trace_level")
                .cloned()
                .unwrap_or(defaults.trace_level),
        }
    }

    /// Theme from `theme_file`, else `theme`, else the default.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial application state from configuration.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing booklist plugin");

    let catalog_path = infrastructure::resolve_catalog_path(&config.catalog_path);
    AppState::new(
        catalog_path.to_string_lossy(),
        config.page_size,
        config.load_theme(),
    )
}
