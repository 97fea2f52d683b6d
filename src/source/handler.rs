//! Source worker executing requests against a record source.
//!
//! The worker is the only place that calls a [`RecordSource`]. It turns each
//! [`SourceRequest`] into exactly one [`SourceResponse`]; failures become
//! failure responses rather than errors so the table can render them.

use crate::source::backend::{RecordSource, SourceResult};
use crate::source::{SourceRequest, SourceResponse};

/// Executes source requests.
pub struct SourceWorker {
    source: Box<dyn RecordSource>,
}

impl SourceWorker {
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Helper for handling source results with consistent logging.
    fn handle_source_result<T, F, E>(
        operation: &str,
        result: SourceResult<T>,
        on_success: F,
        on_error: E,
    ) -> SourceResponse
    where
        F: FnOnce(T) -> SourceResponse,
        E: FnOnce(crate::domain::UpstreamError) -> SourceResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "source operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "source operation failed");
                on_error(e)
            }
        }
    }

    /// Executes one request and returns its response.
    pub fn handle(&self, request: SourceRequest) -> SourceResponse {
        let span = match request.trace_context() {
            Some(ctx) => tracing::debug_span!("source_request",
                trace_id = %ctx.trace_id,
                parent_span_id = %ctx.parent_span_id
            ),
            None => tracing::debug_span!("source_request"),
        };
        let _guard = span.entered();

        match request {
            SourceRequest::FetchFieldMetadata {
                object_name,
                field_list,
                filter_expression,
                ..
            } => Self::handle_source_result(
                "fetch field metadata",
                self.source
                    .fetch_field_metadata(&object_name, &field_list, &filter_expression),
                |metadata| {
                    tracing::debug!(fields = metadata.len(), "field metadata resolved");
                    SourceResponse::FieldMetadataLoaded { metadata }
                },
                |error| SourceResponse::FieldMetadataFailed { error },
            ),
            SourceRequest::FetchRecords {
                request_id,
                object_name,
                field_list,
                filter_expression,
                ..
            } => {
                tracing::debug!(
                    request_id = request_id,
                    object_name = %object_name,
                    filter = %filter_expression.bind().text,
                    "fetching records"
                );
                Self::handle_source_result(
                    "fetch records",
                    self.source
                        .fetch_records(&object_name, &field_list, &filter_expression),
                    |records| {
                        tracing::debug!(request_id = request_id, count = records.len(), "records fetched");
                        SourceResponse::RecordsLoaded { request_id, records }
                    },
                    |error| SourceResponse::RecordsFailed { request_id, error },
                )
            }
        }
    }
}

impl std::fmt::Debug for SourceWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceWorker").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldMetadata, FilterExpression, RawRecord, UpstreamError, Value};

    struct StubSource {
        fail: bool,
    }

    impl RecordSource for StubSource {
        fn fetch_records(
            &self,
            _object_name: &str,
            _field_list: &[String],
            _filter: &FilterExpression,
        ) -> SourceResult<Vec<RawRecord>> {
            if self.fail {
                return Err(UpstreamError::new("E", "records down", "trace"));
            }
            let mut record = RawRecord::new();
            record.insert("Id".to_string(), Value::from("001"));
            Ok(vec![record])
        }

        fn fetch_field_metadata(
            &self,
            _object_name: &str,
            _field_list: &[String],
            _filter: &FilterExpression,
        ) -> SourceResult<Vec<FieldMetadata>> {
            if self.fail {
                return Err(UpstreamError::new("E", "metadata down", "trace"));
            }
            Ok(vec![])
        }
    }

    fn records_request(request_id: u64) -> SourceRequest {
        SourceRequest::fetch_records(
            request_id,
            "Account".to_string(),
            vec!["Name".to_string()],
            FilterExpression::new("Id != NULL"),
        )
    }

    #[test]
    fn record_responses_echo_request_id() {
        let worker = SourceWorker::new(Box::new(StubSource { fail: false }));
        match worker.handle(records_request(7)) {
            SourceResponse::RecordsLoaded { request_id, records } => {
                assert_eq!(request_id, 7);
                assert_eq!(records.len(), 1);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn record_failures_become_failed_responses() {
        let worker = SourceWorker::new(Box::new(StubSource { fail: true }));
        assert_eq!(
            worker.handle(records_request(2)),
            SourceResponse::RecordsFailed {
                request_id: 2,
                error: UpstreamError::new("E", "records down", "trace"),
            }
        );
    }

    #[test]
    fn metadata_failures_become_failed_responses() {
        let worker = SourceWorker::new(Box::new(StubSource { fail: true }));
        let response = worker.handle(SourceRequest::fetch_field_metadata(
            "Account".to_string(),
            vec![],
            FilterExpression::new("Id != NULL"),
        ));
        assert!(matches!(response, SourceResponse::FieldMetadataFailed { .. }));
    }
}
