//! JSON-lines span formatter.
//!
//! Every finished span becomes one flat JSON object:
//!
//! ```json
//! {"service":"searchlist","traceId":"…","spanId":"…","parentSpanId":null,
//!  "name":"handle_event","startUnixNano":1700000000000000000,
//!  "durationMicros":42,"status":"unset","attributes":{"event_type":"Search"}}
//! ```

use std::collections::BTreeMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use opentelemetry::trace::{SpanId, Status};
use opentelemetry_sdk::export::trace::SpanData;
use serde::Serialize;

/// Serialized form of one span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanRecord {
    pub service: String,
    pub trace_id: String,
    pub span_id: String,
    pub parent_span_id: Option<String>,
    pub name: String,
    pub start_unix_nano: u128,
    pub duration_micros: u128,
    pub status: String,
    pub attributes: BTreeMap<String, String>,
}

impl SpanRecord {
    #[must_use]
    pub fn from_span(service: &str, span: &SpanData) -> Self {
        let parent_span_id =
            (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id));

        Self {
            service: service.to_string(),
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            name: span.name.to_string(),
            start_unix_nano: unix_nanos(span.start_time),
            duration_micros: span
                .end_time
                .duration_since(span.start_time)
                .unwrap_or(Duration::ZERO)
                .as_micros(),
            status: status_label(&span.status),
            attributes: span
                .attributes
                .iter()
                .map(|kv| (kv.key.to_string(), kv.value.to_string()))
                .collect(),
        }
    }
}

/// Formats one span as a single JSON line.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_line(service: &str, span: &SpanData) -> serde_json::Result<String> {
    serde_json::to_string(&SpanRecord::from_span(service, span))
}

fn unix_nanos(time: SystemTime) -> u128 {
    time.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO).as_nanos()
}

fn status_label(status: &Status) -> String {
    match status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    }
}
