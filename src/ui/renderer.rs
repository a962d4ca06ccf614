//! Top-level rendering entry point.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI on stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI for a pane of `rows` by `cols` to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_catalog(&viewmodel, &state.theme, cols, rows);
}
