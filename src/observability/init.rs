//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on every span.
pub const SERVICE_NAME: &str = "gallerist";

/// File name of the span log inside the data directory.
pub const TRACE_FILE_NAME: &str = "gallerist-spans.jsonl";

/// Resolves the filter directive: `RUST_LOG`, then `trace_level`, then `info`.
fn filter_directive(config: &Config) -> String {
    std::env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| config.trace_level.clone())
        .unwrap_or_else(|| "info".to_string())
}

/// Installs the global subscriber: an [`EnvFilter`] plus an OpenTelemetry
/// layer exporting to `<data_dir>/gallerist-spans.jsonl`.
///
/// Returns the span file path, or `None` if the data directory could not be
/// created (tracing stays off). Only the first successful call installs a
/// subscriber; later calls are no-ops.
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let data_dir = config.data_dir.clone();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return None;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);

    let trace_file = data_dir.join(TRACE_FILE_NAME);
    let provider = tracer::create_tracer_provider(trace_file.clone(), SERVICE_NAME, resource);

    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive(config)))
        .with(otel_layer);

    let _ = subscriber.try_init();
    Some(trace_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_level_is_used_without_rust_log() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = Config {
            trace_level: Some("debug".to_string()),
            ..Config::default()
        };
        assert_eq!(filter_directive(&config), "debug");
        assert_eq!(filter_directive(&Config::default()), "info");
    }

    #[test]
    fn init_skips_unwritable_data_dir() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let config = Config {
            data_dir: file.path().join("nested"),
            ..Config::default()
        };
        assert!(init_tracing(&config).is_none());
    }
}
