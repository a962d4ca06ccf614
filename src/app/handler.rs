//! Event handling and state transition logic.
//!
//! [`handle_event`] translates key commands, permission results and worker
//! responses into [`ViewEvent`]s for the reducer, cursor moves, or
//! [`Action`]s for the plugin runtime. It returns whether the UI needs a
//! re-render alongside the actions.
//!
//! # Example
//!
//! ```
//! use booklist::app::{handle_event, Action, AppState, Event};
//! use booklist::domain::PageSize;
//! use booklist::ui::Theme;
//!
//! let mut state = AppState::new("/host/books.json", PageSize::Twenty, Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions.as_slice(), [Action::PostToWorker(_)]));
//! # Ok::<(), booklist::BooklistError>(())
//! ```

use super::modes::{FormField, InputMode};
use super::reducer::ViewEvent;
use super::state::LoadStatus;
use crate::app::{Action, AppState};
use crate::domain::error::{BooklistError, Result};
use crate::domain::filter::{next_pages_bucket, next_year_bucket};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, Zellij, or the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the row cursor down (wraps to top).
    KeyDown,
    /// Moves the row cursor up (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Starts editing a text field.
    EditField(FormField),
    /// Appends a character to the field being edited.
    Char(char),
    /// Removes the last character of the field being edited.
    Backspace,
    /// Leaves the field being edited; arms the search when on the search field.
    Confirm,
    /// Leaves the field being edited without arming the search.
    Cancel,

    /// The search action.
    SubmitSearch,
    CyclePagesBucket,
    CycleYearBucket,
    CyclePageSize,
    /// Removes every filter and the search text.
    ClearFilters,

    /// Selects a page by number; ignored unless the page exists.
    SelectPage(usize),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,

    /// Host access was granted, so the catalog can be read.
    PermissionsGranted,
    /// Host access was refused; the catalog is never loaded.
    PermissionsDenied,

    /// Response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns
/// `(should_render, actions)`.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the plugin shim's error path in
/// one place.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::EditField(field) => {
            tracing::debug!(field = ?field, "editing field");
            state.input_mode = InputMode::Editing(*field);
            state.page_input.clear();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let InputMode::Editing(field) = state.input_mode else {
                return Ok((false, vec![]));
            };

            if field == FormField::Page {
                if !c.is_ascii_digit() {
                    return Ok((false, vec![]));
                }
                state.page_input.push(*c);
                return Ok((true, vec![]));
            }

            let mut value = state.field_value(field).to_string();
            value.push(*c);
            let changed = edit_event(field, value).is_some_and(|event| state.dispatch(event));
            Ok((changed, vec![]))
        }
        Event::Backspace => {
            let InputMode::Editing(field) = state.input_mode else {
                return Ok((false, vec![]));
            };

            if field == FormField::Page {
                return Ok((state.page_input.pop().is_some(), vec![]));
            }

            let mut value = state.field_value(field).to_string();
            if value.pop().is_none() {
                return Ok((false, vec![]));
            }
            let changed = edit_event(field, value).is_some_and(|event| state.dispatch(event));
            Ok((changed, vec![]))
        }
        Event::Confirm => {
            let InputMode::Editing(field) = state.input_mode else {
                return Ok((false, vec![]));
            };

            state.input_mode = InputMode::Normal;
            match field {
                FormField::Search => {
                    state.dispatch(ViewEvent::SubmitSearch);
                }
                FormField::Page => {
                    let input = std::mem::take(&mut state.page_input);
                    match input.parse::<usize>() {
                        Ok(page) => {
                            select_page(state, page);
                        }
                        Err(e) => tracing::debug!(input = %input, error = %e, "not a page number"),
                    }
                }
                FormField::Country | FormField::Language => {}
            }
            Ok((true, vec![]))
        }
        Event::Cancel => {
            if state.input_mode == InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            state.page_input.clear();
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            tracing::debug!(search = %state.view.search_text, "search submitted");
            Ok((state.dispatch(ViewEvent::SubmitSearch), vec![]))
        }
        Event::CyclePagesBucket => {
            let next = next_pages_bucket(state.view.criteria.pages);
            Ok((state.dispatch(ViewEvent::SetPagesBucket(next)), vec![]))
        }
        Event::CycleYearBucket => {
            let next = next_year_bucket(state.view.criteria.year);
            Ok((state.dispatch(ViewEvent::SetYearBucket(next)), vec![]))
        }
        Event::CyclePageSize => {
            let next = state.view.page_size.next();
            Ok((state.dispatch(ViewEvent::SetPageSize(next)), vec![]))
        }
        Event::ClearFilters => Ok((state.dispatch(ViewEvent::ClearFilters), vec![])),
        Event::SelectPage(page) => Ok((select_page(state, *page), vec![])),
        Event::NextPage => {
            let last = state.total_pages().max(1);
            let next = (state.view.current_page + 1).min(last);
            Ok((state.dispatch(ViewEvent::SelectPage(next)), vec![]))
        }
        Event::PreviousPage => {
            let previous = state.view.current_page.saturating_sub(1);
            Ok((state.dispatch(ViewEvent::SelectPage(previous)), vec![]))
        }
        Event::FirstPage => Ok((state.dispatch(ViewEvent::SelectPage(1)), vec![])),
        Event::LastPage => {
            let last = state.total_pages().max(1);
            Ok((state.dispatch(ViewEvent::SelectPage(last)), vec![]))
        }
        Event::PermissionsGranted => {
            if state.load_status != LoadStatus::Idle {
                tracing::debug!(status = ?state.load_status, "catalog load already requested");
                return Ok((false, vec![]));
            }

            tracing::debug!(path = %state.catalog_path, "requesting catalog load");
            state.load_status = LoadStatus::Requested;
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::load_catalog(
                    state.catalog_path.clone(),
                ))],
            ))
        }
        Event::PermissionsDenied => {
            tracing::error!("host filesystem access denied, catalog cannot be loaded");
            state.load_status = LoadStatus::Failed;
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => {
            if matches!(state.load_status, LoadStatus::Loaded | LoadStatus::Failed) {
                tracing::debug!(status = ?state.load_status, "ignoring late worker response");
                return Ok((false, vec![]));
            }

            match response {
                WorkerResponse::CatalogLoaded { books } => {
                    tracing::debug!(count = books.len(), "catalog received");
                    state.load_status = LoadStatus::Loaded;
                    state.set_books(books.clone());
                    Ok((true, vec![]))
                }
                WorkerResponse::CatalogFailed { message } => {
                    let error = BooklistError::Worker(message.clone());
                    tracing::error!(error = %error, "catalog load failed");
                    state.load_status = LoadStatus::Failed;
                    Ok((true, vec![]))
                }
            }
        }
    }
}

/// Jumps to `page` if it exists. Returns whether the view changed.
fn select_page(state: &mut AppState, page: usize) -> bool {
    if !(1..=state.total_pages()).contains(&page) {
        tracing::debug!(page = page, total = state.total_pages(), "page does not exist");
        return false;
    }
    state.dispatch(ViewEvent::SelectPage(page))
}

/// Reducer event for a text field edit. The page field has none: its digits
/// stay in `AppState::page_input` until confirmed.
fn edit_event(field: FormField, value: String) -> Option<ViewEvent> {
    match field {
        FormField::Country => Some(ViewEvent::SetCountry(value)),
        FormField::Language => Some(ViewEvent::SetLanguage(value)),
        FormField::Search => Some(ViewEvent::EditSearch(value)),
        FormField::Page => None,
    }
}
