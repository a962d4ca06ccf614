//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never talks to Zellij directly;
//! it returns `Action`s and the plugin shim in `main.rs` executes them.

use crate::worker::WorkerMessage;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a request to the background worker.
    PostToWorker(WorkerMessage),
}
