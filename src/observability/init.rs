//! Subscriber setup.

use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.trace_level` (default `info`). Spans are written to
/// `campusnav-otlp.json` in the configured data directory.
///
/// Fails silently: if the directory cannot be created or a subscriber is
/// already installed, the process runs without tracing.
///
/// ```rust
/// use campusnav::observability::init_tracing;
/// use campusnav::Config;
///
/// let dir = std::env::temp_dir().join("campusnav-doc");
/// init_tracing(&Config { data_dir: Some(dir), ..Config::default() });
/// tracing::debug!("tracing is active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = config.data_dir.clone().unwrap_or_else(paths::get_data_dir);
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.trace_level.as_deref().unwrap_or("info")));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "campusnav"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        KeyValue::new("campusnav.role", config.role.as_str()),
    ]);

    let provider = tracer::file_tracer_provider(data_dir.join(paths::TRACE_FILE), resource);
    let layer = OpenTelemetryLayer::new(provider.tracer("campusnav"));

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
