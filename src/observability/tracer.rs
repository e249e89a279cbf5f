//! OpenTelemetry tracer provider that exports spans to a rotating local file.

use super::file_writer::{RotatingFile, RotationPolicy};
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes each finished span as one JSON line.
#[derive(Debug)]
struct JsonLinesExporter {
    file: RotatingFile,
    formatter: SpanFormatter,
    is_shutdown: bool,
}

impl JsonLinesExporter {
    fn write_batch(&self, batch: &[SpanData]) -> Result<(), TraceError> {
        for span in batch {
            let line = self
                .formatter
                .format_span(span)
                .map_err(|e| TraceError::from(e.to_string()))?;
            self.file
                .append_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.write_batch(&batch)
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }
}

/// Builds a provider whose spans land in `file_path`.
///
/// Spans are exported synchronously as they end, so nothing is lost when the
/// process exits without flushing.
pub fn create_tracer_provider(file_path: PathBuf, service: &str, resource: Resource) -> TracerProvider {
    let exporter = JsonLinesExporter {
        file: RotatingFile::new(file_path, RotationPolicy::default()),
        formatter: SpanFormatter::new(service),
        is_shutdown: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
