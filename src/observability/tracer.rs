//! OpenTelemetry tracer provider exporting spans to a JSON-lines file.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry::KeyValue;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};

use super::file_writer::FileWriter;
use super::span_formatter::format_line;

/// Span exporter writing one JSON line per span.
struct FileSpanExporter {
    writer: FileWriter,
    service_name: String,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(writer: FileWriter, service_name: String) -> Self {
        Self {
            writer,
            service_name,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> Result<(), TraceError> {
        for span in batch {
            let line = format_line(&self.service_name, span).map_err(|e| TraceError::from(e.to_string()))?;
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.write_batch(&batch)
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("service_name", &self.service_name)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Creates a tracer provider exporting every finished span to `file_path`.
///
/// Spans are exported immediately (simple processor, no batching), so the
/// file is complete as soon as the process exits.
#[must_use]
pub fn create_tracer_provider(file_path: PathBuf, max_bytes: u64, service_name: &str) -> TracerProvider {
    let resource = Resource::new(vec![KeyValue::new("service.name", service_name.to_string())]);
    let exporter = FileSpanExporter::new(FileWriter::new(file_path, max_bytes), service_name.to_string());

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};

    #[test]
    fn finished_spans_land_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");
        let provider = create_tracer_provider(path.clone(), 1024 * 1024, "searchlist");

        provider.tracer("test").in_span("paginate", |_cx| {});

        let content = std::fs::read_to_string(&path).unwrap();
        let line: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert_eq!(line["name"], "paginate");
        assert_eq!(line["service"], "searchlist");
    }
}
