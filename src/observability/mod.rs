//! Tracing setup with file-based OpenTelemetry export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer → FileSpanExporter → booklist-otlp.json
//! ```
//!
//! Spans land as OTLP JSON lines in `booklist-otlp.json` under the plugin
//! data directory, rotated at 10 MB with three backups. The level comes from
//! the `trace_level` plugin option (default `info`).

mod exporter;
mod rotating;

pub use exporter::create_tracer_provider;
pub use rotating::RotatingFile;

use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const SERVICE_NAME: &str = "Booklist";

pub const TRACE_FILE_NAME: &str = "booklist-otlp.json";

/// Installs the global subscriber.
///
/// Does nothing if the data directory cannot be created or a subscriber is
/// already installed, so both the plugin and its worker may call it.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider = create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
