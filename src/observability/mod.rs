//! OpenTelemetry-based tracing with local file export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → rotating file
//! ```
//!
//! Spans are written one JSON object per line to
//! `<data_dir>/gallerist-spans.jsonl`, rotated at 10 MB with three backups.
//!
//! The filter level comes from `RUST_LOG`, then the `trace_level` config
//! option, then defaults to `info`.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`tracer`]: tracer provider and span exporter
//! - [`span_formatter`]: span to JSON line
//! - [`file_writer`]: size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
