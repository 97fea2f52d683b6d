//! Request and response types exchanged with the source worker.
//!
//! Record fetches are asynchronous from the table's point of view: the table
//! emits a [`SourceRequest`] as an action, and the answer comes back later as
//! a [`SourceResponse`] event. Record requests carry a sequence number so the
//! table can recognise answers to searches it has since replaced.

use crate::domain::{FieldMetadata, FilterExpression, RawRecord, UpstreamError};
use serde::{Deserialize, Serialize};

/// Tracing context captured when a request is created.
///
/// Lets the worker parent its span under the span that issued the request,
/// even when the request is executed from a different call stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the issuing span as a hex string.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the context of the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span
    /// context is invalid.
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

/// Generates constructors that attach the current trace context.
macro_rules! source_request_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl SourceRequest {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " request with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

source_request_builders! {
    fetch_field_metadata(FetchFieldMetadata {
        object_name: String,
        field_list: Vec<String>,
        filter_expression: FilterExpression,
    }),
    fetch_records(FetchRecords {
        request_id: u64,
        object_name: String,
        field_list: Vec<String>,
        filter_expression: FilterExpression,
    }),
}

/// Requests sent from the table to the source worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SourceRequest {
    /// Resolve column metadata for the configured fields.
    FetchFieldMetadata {
        object_name: String,
        field_list: Vec<String>,
        filter_expression: FilterExpression,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Fetch records for one search.
    FetchRecords {
        /// Sequence number assigned by the table, increasing per search.
        request_id: u64,
        object_name: String,
        field_list: Vec<String>,
        filter_expression: FilterExpression,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl SourceRequest {
    #[must_use]
    pub fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::FetchFieldMetadata { trace_context, .. }
            | Self::FetchRecords { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the source worker back to the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SourceResponse {
    /// Field metadata was resolved.
    FieldMetadataLoaded { metadata: Vec<FieldMetadata> },

    /// Field metadata could not be resolved.
    FieldMetadataFailed { error: UpstreamError },

    /// Records were fetched for the request with `request_id`.
    RecordsLoaded {
        request_id: u64,
        records: Vec<RawRecord>,
    },

    /// The request with `request_id` failed.
    RecordsFailed {
        request_id: u64,
        error: UpstreamError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_leave_trace_context_empty_without_otel_layer() {
        let request = SourceRequest::fetch_records(
            3,
            "Account".to_string(),
            vec!["Name".to_string()],
            FilterExpression::new("Id != NULL"),
        );
        assert!(request.trace_context().is_none());
        assert!(matches!(request, SourceRequest::FetchRecords { request_id: 3, .. }));
    }

    #[test]
    fn requests_serialize_without_empty_trace_context() {
        let request = SourceRequest::fetch_field_metadata(
            "Account".to_string(),
            vec!["Phone".to_string()],
            FilterExpression::new("Id != NULL"),
        );
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("FetchFieldMetadata"));
        assert!(!json.contains("trace_context"));
    }
}
