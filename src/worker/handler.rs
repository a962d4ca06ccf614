//! Worker thread that performs the one-shot catalog load.
//!
//! File I/O runs here so the plugin's render loop never blocks on it. The
//! worker answers each [`WorkerMessage`] with exactly one [`WorkerResponse`].

use crate::catalog::{CatalogSource, JsonCatalog};
use crate::domain::error::Result;
use crate::domain::Book;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// Zellij constructs the worker through `Default`. The catalog source is
/// chosen from the first `LoadCatalog` message unless one was injected with
/// [`BooklistWorker::with_source`].
#[derive(Serialize, Deserialize, Default)]
pub struct BooklistWorker {
    #[serde(skip)]
    source: Option<Box<dyn CatalogSource>>,
}

impl std::fmt::Debug for BooklistWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BooklistWorker")
            .field("source", &self.source.as_ref().map(|s| s.describe()))
            .finish()
    }
}

impl BooklistWorker {
    /// Creates a worker that always reads from `source`.
    #[must_use]
    pub fn with_source(source: Box<dyn CatalogSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    fn source_for(&mut self, path: &str) -> &dyn CatalogSource {
        let source = self
            .source
            .get_or_insert_with(|| Box::new(JsonCatalog::new(path)) as Box<dyn CatalogSource>);
        &**source
    }

    /// Converts a load result into the matching response, logging either way.
    fn load_response(description: &str, result: Result<Vec<Book>>) -> WorkerResponse {
        match result {
            Ok(books) => {
                tracing::debug!(source = %description, count = books.len(), "catalog loaded");
                WorkerResponse::CatalogLoaded { books }
            }
            Err(e) => {
                tracing::error!(source = %description, error = %e, "catalog load failed");
                WorkerResponse::CatalogFailed {
                    message: format!("load catalog from {description}: {e}"),
                }
            }
        }
    }

    /// Attaches the sender's trace context so worker spans share its trace.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let remote = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(remote)
                .attach(),
        )
    }

    /// Processes one request and returns its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadCatalog { path, .. } => {
                let source = self.source_for(&path);
                let description = source.describe();
                Self::load_response(&description, source.load_books())
            }
        }
    }

    /// Decodes a raw request and answers it. Undecodable requests are
    /// answered with [`WorkerResponse::CatalogFailed`].
    pub fn handle_payload(&mut self, payload: &str) -> WorkerResponse {
        match serde_json::from_str::<WorkerMessage>(payload) {
            Ok(request) => self.handle_message(request),
            Err(e) => {
                tracing::error!(error = %e, "failed to deserialize worker message");
                WorkerResponse::CatalogFailed {
                    message: format!("undecodable worker request: {e}"),
                }
            }
        }
    }
}

/// Set once the worker thread has installed its own subscriber.
static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

impl ZellijWorker<'_> for BooklistWorker {
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let response = self.handle_payload(&payload);

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::error!(error = %e, "failed to serialize worker response"),
        }
    }
}
