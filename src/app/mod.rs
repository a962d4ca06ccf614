//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the domain/worker layers:
//!
//! ```text
//! Keys → Event → handle_event → ViewEvent → reduce → ViewState
//!                     │                                   │
//!                     └── Action (worker, close)    AppState::compute_viewmodel
//! ```
//!
//! - [`actions`]: side effects emitted by the handler
//! - [`handler`]: event processing
//! - [`modes`]: normal vs. editing input modes
//! - [`reducer`]: pure filter/search/pagination transitions
//! - [`state`]: application state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{FormField, InputMode};
pub use reducer::{reduce, ViewEvent, ViewState};
pub use state::{AppState, LoadStatus};
