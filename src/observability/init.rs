//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to exported spans.
pub const SERVICE_NAME: &str = "searchlist";

const DEFAULT_LEVEL: &str = "info";

/// Level directive used when `RUST_LOG` is not set.
#[must_use]
pub fn fallback_level(config: &Config) -> &str {
    config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL)
}

/// Builds the event filter.
///
/// `RUST_LOG` wins when set and valid; otherwise `config.trace_level`, then
/// `info`. An unparsable configured level also falls back to `info`.
#[must_use]
pub fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_level(config)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Installs the global tracing subscriber.
///
/// Events are printed to stderr. When `config.trace_file` is set, finished
/// spans are also exported to that file as JSON lines through OpenTelemetry.
///
/// Safe to call more than once; only the first call takes effect.
///
/// # Example
///
/// ```rust
/// use searchlist::observability::init_tracing;
/// use searchlist::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let otel_layer = config.trace_file.as_ref().map(|path| {
        let provider = tracer::create_tracer_provider(path.clone(), config.trace_max_bytes, SERVICE_NAME);
        OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME))
    });

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(build_filter(config))
        .with(fmt_layer)
        .with(otel_layer)
        .try_init();
}
