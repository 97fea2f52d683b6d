//! Record sources and the worker that talks to them.
//!
//! # Modules
//!
//! - `backend`: the [`RecordSource`] trait implemented by backends
//! - `json`: [`JsonFileSource`], an in-memory dataset loaded from JSON
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: [`SourceWorker`], executing requests against a source

pub mod backend;
pub mod handler;
pub mod json;
pub mod messages;

pub use backend::{RecordSource, SourceResult};
pub use handler::SourceWorker;
pub use json::JsonFileSource;
pub use messages::{SourceRequest, SourceResponse, TraceContext};
