//! Zellij plugin wrapper and entry point.
//!
//! Maps Zellij events onto library [`Event`]s, executes the returned
//! [`Action`]s and delegates rendering. All behavior lives in the library.
//!
//! ```text
//! ┌──────────────────────────┐
//! │   Zellij Main Thread     │
//! │  ┌───────────────────┐   │
//! │  │  State (plugin)   │   │  ← keys, rendering
//! │  └───────────────────┘   │
//! │     │ LoadCatalog  ▲     │
//! │     ▼              │     │
//! │  ┌───────────────────┐   │
//! │  │  BooklistWorker   │   │  ← reads the JSON catalog
//! │  └───────────────────┘   │
//! └──────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build `AppState`, ask for
//!    `FullHdAccess`
//! 2. **Permission granted**: post `LoadCatalog` to the worker, once
//! 3. **Worker response**: store the books (or log the failure) and render
//!
//! # Keybindings
//!
//! Any mode: `Ctrl+n`/`Ctrl+p` move the row cursor.
//!
//! Normal mode:
//! - `c` / `l` / `/`: edit country / language / search
//! - `s` or `Enter`: run the title search
//! - `p` / `y` / `z`: cycle pages bucket / year bucket / page size
//! - `1`-`9`: go to page; `g`: type any page number
//! - `Left`/`h`, `Right`/`n`, `Home`, `End`: page through
//! - `j`/`k`, `Down`/`Up`: move the row cursor
//! - `x`: clear filters and search
//! - `q` / `Esc`: close
//!
//! Editing a field: characters type, `Backspace` deletes, `Enter` confirms
//! (runs the search on the search field, jumps on the page field), `Esc`
//! leaves the field.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use booklist::app::FormField;
use booklist::worker::{BooklistWorker, WorkerMessage, WorkerResponse};
use booklist::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);
register_worker!(BooklistWorker, booklist_worker, BOOKLIST_WORKER);

/// Worker namespace; also the custom message name both ways.
const WORKER_NAME: &str = "booklist";

struct State {
    app: booklist::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: booklist::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        booklist::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(
            catalog_path = %config.catalog_path,
            page_size = %config.page_size,
            "parsed configuration"
        );
        self.app = booklist::initialize(&config);

        request_permission(&[PermissionType::FullHdAccess]);
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!(
            "plugin_update_event",
            otel.name = %span_name,
            event_type = %event_name
        );
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => Event::PermissionsGranted,
                PermissionStatus::Denied => Event::PermissionsDenied,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for action in actions {
                    self.execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        booklist::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
        if ctrl && key.bare_key == BareKey::Char('n') {
            return Some(Event::KeyDown);
        }
        if ctrl && key.bare_key == BareKey::Char('p') {
            return Some(Event::KeyUp);
        }
        if ctrl || key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        match self.app.input_mode {
            InputMode::Editing(_) => Self::map_editing_key(&key.bare_key),
            InputMode::Normal => Self::map_normal_key(&key.bare_key),
        }
    }

    fn map_editing_key(key: &BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Enter => Event::Confirm,
            BareKey::Esc => Event::Cancel,
            BareKey::Backspace => Event::Backspace,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char(c) => Event::Char(*c),
            _ => return None,
        })
    }

    fn map_normal_key(key: &BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Left | BareKey::PageUp | BareKey::Char('h') => Event::PreviousPage,
            BareKey::Right | BareKey::PageDown | BareKey::Char('n') => Event::NextPage,
            BareKey::Home => Event::FirstPage,
            BareKey::End => Event::LastPage,
            BareKey::Char('c') => Event::EditField(FormField::Country),
            BareKey::Char('l') => Event::EditField(FormField::Language),
            BareKey::Char('/') => Event::EditField(FormField::Search),
            BareKey::Char('g') => Event::EditField(FormField::Page),
            BareKey::Enter | BareKey::Char('s') => Event::SubmitSearch,
            BareKey::Char('p') => Event::CyclePagesBucket,
            BareKey::Char('y') => Event::CycleYearBucket,
            BareKey::Char('z') => Event::CyclePageSize,
            BareKey::Char('x') => Event::ClearFilters,
            BareKey::Char(digit @ '1'..='9') => Event::SelectPage(usize::from(*digit as u8 - b'0')),
            BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        Some(Event::WorkerResponse(WorkerResponse::decode(payload)))
    }

    /// Posts a request to the worker. A request that cannot be encoded fails
    /// the load instead of leaving it pending.
    fn post_worker_message(&mut self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize worker message");
                let failed = Event::WorkerResponse(WorkerResponse::CatalogFailed {
                    message: format!("unencodable worker request: {e}"),
                });
                if let Err(e) = handle_event(&mut self.app, &failed) {
                    tracing::debug!(error = %e, "error handling event");
                }
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => self.post_worker_message(message),
        }
    }
}
