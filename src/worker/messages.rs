//! Plugin ⇄ worker protocol.
//!
//! Messages travel as JSON inside Zellij custom messages. Requests carry an
//! optional [`TraceContext`] so spans opened in the worker join the trace of
//! the plugin event that triggered them.

use crate::domain::Book;
use serde::{Deserialize, Serialize};

/// Trace and parent span ids captured from the sending thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace id, 32 hex chars.
    pub trace_id: String,

    /// Span id of the sender, 16 hex chars.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry context of the current `tracing` span.
    ///
    /// Returns `None` when no subscriber is installed or the span is not
    /// sampled.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Requests sent from the plugin to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the catalog at `path` and reply with its books.
    LoadCatalog {
        /// Sandbox path of the JSON catalog.
        path: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Builds a `LoadCatalog` request tagged with the current trace context.
    #[must_use]
    pub fn load_catalog(path: impl Into<String>) -> Self {
        Self::LoadCatalog {
            path: path.into(),
            trace_context: TraceContext::from_current(),
        }
    }

    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Replies sent from the worker back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The catalog was read and decoded.
    CatalogLoaded {
        /// Every book, in file order.
        books: Vec<Book>,
    },

    /// The catalog could not be read or decoded.
    CatalogFailed {
        /// Human-readable failure description.
        message: String,
    },
}

impl WorkerResponse {
    /// Decodes a reply payload posted by the worker.
    ///
    /// A payload that does not decode still ends the load: it becomes a
    /// [`WorkerResponse::CatalogFailed`] so the plugin never waits on a reply
    /// it cannot read.
    ///
    /// # Example
    ///
    /// ```
    /// use booklist::worker::WorkerResponse;
    ///
    /// let response = WorkerResponse::decode("not json");
    /// assert!(matches!(response, WorkerResponse::CatalogFailed { .. }));
    /// ```
    #[must_use]
    pub fn decode(payload: &str) -> Self {
        serde_json::from_str(payload).unwrap_or_else(|e| {
            tracing::error!(error = %e, payload_len = payload.len(), "failed to decode worker response");
            Self::CatalogFailed {
                message: format!("undecodable worker response: {e}"),
            }
        })
    }
}
