//! Logging and OpenTelemetry tracing with file-based span export.
//!
//! ```text
//! tracing → EnvFilter ─┬→ fmt layer → stderr
//!                      └→ tracing-opentelemetry → SDK → FileSpanExporter → JSON lines
//! ```
//!
//! The level comes from `RUST_LOG`, then the `trace_level` config option,
//! then `info`. Span export is enabled by setting `trace_file`; the file
//! rotates once it exceeds `trace_max_bytes`.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: tracer provider with the file exporter
//! - `span_formatter`: one JSON object per span
//! - `file_writer`: size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::DEFAULT_MAX_BYTES;
pub use init::{build_filter, fallback_level, init_tracing, SERVICE_NAME};
