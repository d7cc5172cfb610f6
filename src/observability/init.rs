//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with OpenTelemetry
//! integration, setting up the complete observability pipeline from `tracing`
//! macros to file export.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters spans based on the resolved trace level
/// 2. Exports spans to OpenTelemetry
/// 3. Serializes spans to OTLP JSON format
/// 4. Writes to a rotating file with backups
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable if set
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Traces are written to `<data dir>/petid-otlp.json`, where the data
/// directory follows [`crate::infrastructure::paths::get_data_dir`].
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently fails if directory creation fails (observability is optional)
/// - Idempotent: Safe to call multiple times (only first call takes effect)
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config
            .trace_level
            .clone()
            .unwrap_or_else(|| "info".to_string());
        EnvFilter::new(level)
    });

    let data_dir = config
        .data_dir
        .clone()
        .unwrap_or_else(crate::infrastructure::paths::get_data_dir);
    if std::fs::create_dir_all(&data_dir).is_err() {
        // Silently fail if we can't create the directory
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        "petid",
    )]);

    let trace_file = data_dir.join("petid-otlp.json");
    let provider = tracer::create_tracer_provider(trace_file, resource);

    let tracer = provider.tracer("petid");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer);

    let _ = subscriber.try_init();
}
