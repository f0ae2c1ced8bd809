//! Tracing and OpenTelemetry setup.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, TracerProvider},
};
use opentelemetry_stdout::SpanExporter;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with an OpenTelemetry stdout exporter.
///
/// Installs a registry with two layers: an OpenTelemetry span layer backed by
/// the stdout exporter, and a human-readable fmt layer. Both respect the
/// `RUST_LOG` environment variable.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_telemetry() -> Result<(), Box<dyn std::error::Error>> {
    let exporter = SpanExporter::default();

    let provider = TracerProvider::builder()
        .with_simple_exporter(exporter)
        .with_id_generator(RandomIdGenerator::default())
        .with_sampler(Sampler::AlwaysOn)
        .with_resource(Resource::default())
        .build();

    let tracer = provider.tracer("billet");

    let telemetry_layer = tracing_opentelemetry::layer()
        .with_tracer(tracer)
        .with_filter(EnvFilter::from_default_env());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_filter(EnvFilter::from_default_env());

    tracing_subscriber::registry()
        .with(telemetry_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Shutdown OpenTelemetry and flush pending spans.
///
/// Call this before process exit so buffered spans are exported.
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
}
