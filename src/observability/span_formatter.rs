//! One-line JSON records for finished spans.
//!
//! Each exported span becomes a single JSON object:
//!
//! ```json
//! {"service":"gallerist","trace_id":"4bf9…","span_id":"00f0…","parent_span_id":null,
//!  "name":"handle_event","start":"2024-05-01T10:00:00.000123Z","duration_us":42,
//!  "status":"unset","attributes":{"event_type":"SelectNext"},"events":[]}
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::time::SystemTime;

#[derive(Debug, Serialize)]
struct SpanRecord<'a> {
    service: &'a str,
    trace_id: String,
    span_id: String,
    parent_span_id: Option<String>,
    name: &'a str,
    start: String,
    duration_us: u128,
    status: String,
    attributes: Map<String, JsonValue>,
    events: Vec<EventRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct EventRecord<'a> {
    name: &'a str,
    time: String,
    attributes: Map<String, JsonValue>,
}

/// Formats spans for one service.
#[derive(Debug, Clone)]
pub struct SpanFormatter {
    service: String,
}

impl SpanFormatter {
    pub fn new(service: impl Into<String>) -> Self {
        Self { service: service.into() }
    }

    /// Serializes `span` to a single JSON line.
    ///
    /// # Errors
    ///
    /// Returns the serializer error.
    pub fn format_span(&self, span: &SpanData) -> serde_json::Result<String> {
        let parent_span_id =
            (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id));
        let duration_us = span
            .end_time
            .duration_since(span.start_time)
            .map_or(0, |elapsed| elapsed.as_micros());

        let record = SpanRecord {
            service: &self.service,
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            name: span.name.as_ref(),
            start: timestamp(span.start_time),
            duration_us,
            status: status_label(&span.status),
            attributes: attribute_map(&span.attributes),
            events: span
                .events
                .iter()
                .map(|event| EventRecord {
                    name: event.name.as_ref(),
                    time: timestamp(event.timestamp),
                    attributes: attribute_map(&event.attributes),
                })
                .collect(),
        };

        serde_json::to_string(&record)
    }
}

fn timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn status_label(status: &Status) -> String {
    match status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    }
}

fn attribute_map(attributes: &[KeyValue]) -> Map<String, JsonValue> {
    attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect()
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_values_keep_their_json_type() {
        let attributes = vec![
            KeyValue::new("page", 3_i64),
            KeyValue::new("loading", true),
            KeyValue::new("event_type", "SelectNext"),
        ];
        let map = attribute_map(&attributes);
        assert_eq!(map["page"], JsonValue::from(3));
        assert_eq!(map["loading"], JsonValue::Bool(true));
        assert_eq!(map["event_type"], JsonValue::String("SelectNext".to_string()));
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(&Status::Unset), "unset");
        assert_eq!(status_label(&Status::error("boom")), "error: boom");
    }

    #[test]
    fn timestamps_are_utc_rfc3339() {
        assert_eq!(timestamp(SystemTime::UNIX_EPOCH), "1970-01-01T00:00:00.000000Z");
    }
}
