//! Tracing initialization and subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Initializes the tracing subscriber.
///
/// Spans and events are formatted to stderr so they never corrupt the
/// rendered UI on stdout.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. `config.trace_level` if set
/// 3. Default: `"warn"`
///
/// Idempotent: safe to call more than once, only the first call takes
/// effect.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "warn".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
