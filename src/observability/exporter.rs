//! OpenTelemetry span exporter that writes OTLP JSON lines to a file.
//!
//! Each exported batch becomes one line holding a complete
//! `{"resourceSpans": [...]}` document, so the file can be replayed into any
//! OTLP/JSON collector.

use super::rotating::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Value as JsonValue};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope name written into every batch.
const SCOPE_NAME: &str = "booklist";

struct FileSpanExporter {
    file: RotatingFile,
    resource: Resource,
    is_shutdown: AtomicBool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let line = format_batch(&self.resource, &batch).to_string();
        let result = self
            .file
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()));

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Tracer provider exporting every finished span straight to `file_path`.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(file_path),
        resource: resource.clone(),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}

fn format_batch(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attributes: Vec<JsonValue> = resource
        .iter()
        .map(|(key, value)| json!({ "key": key.to_string(), "value": format_value(value) }))
        .collect();

    let spans: Vec<JsonValue> = batch.iter().map(format_span).collect();

    json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attributes },
            "scopeSpans": [{
                "scope": { "name": SCOPE_NAME },
                "spans": spans,
            }],
        }],
    })
}

fn format_span(span: &SpanData) -> JsonValue {
    let (status_code, status_message) = format_status(&span.status);
    let parent_span_id = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent_span_id,
        "name": span.name,
        "kind": span_kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": format_attributes(&span.attributes),
        "events": span.events.iter().map(format_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(format_link).collect::<Vec<_>>(),
        "status": { "code": status_code, "message": status_message },
    })
}

/// OTLP `SpanKind` enum values.
const fn span_kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn format_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.to_string(), "value": format_value(&kv.value) }))
        .collect()
}

/// OTLP `AnyValue`; 64-bit integers are strings per the JSON mapping.
fn format_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.to_string() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

fn format_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": format_attributes(&event.attributes),
    })
}

fn format_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": format_attributes(&link.attributes),
    })
}

fn format_status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn values_use_otlp_json_mapping() {
        assert_eq!(format_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(format_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(format_value(&Value::from("books")), json!({ "stringValue": "books" }));
    }

    #[test]
    fn status_codes_follow_otlp() {
        assert_eq!(format_status(&Status::Unset), (0, String::new()));
        assert_eq!(format_status(&Status::error("boom")), (2, "boom".to_string()));
    }

    #[test]
    fn empty_batch_still_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "Booklist")]);
        let doc = format_batch(&resource, &[]);

        let scope = &doc["resourceSpans"][0]["scopeSpans"][0];
        assert_eq!(scope["scope"]["name"], SCOPE_NAME);
        assert_eq!(scope["spans"], json!([]));

        let attributes = doc["resourceSpans"][0]["resource"]["attributes"]
            .as_array()
            .unwrap();
        assert!(attributes.contains(&json!({
            "key": "service.name",
            "value": { "stringValue": "Booklist" }
        })));
    }

    #[test]
    fn spans_from_provider_land_in_the_file() {
        use opentelemetry::trace::{Tracer, TracerProvider as _};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("booklist-otlp.json");
        let provider = create_tracer_provider(
            path.clone(),
            Resource::new(vec![KeyValue::new("service.name", "Booklist")]),
        );

        provider.tracer("test").in_span("load_catalog", |_cx| {});

        let contents = std::fs::read_to_string(&path).unwrap();
        let doc: JsonValue = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        assert_eq!(
            doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0]["name"],
            "load_catalog"
        );
    }
}
