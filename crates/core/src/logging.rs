use tracing::Level;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Installs a compact stderr logger at `WARN`, overridable through `RUST_LOG`.
pub fn setup_tracing() {
    setup_tracing_with_log_level(Level::WARN);
}

pub fn setup_tracing_with_log_level(level: Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    // stdout carries the outcome line only
    let stderr_layer = fmt::layer().compact().with_writer(std::io::stderr);
    let _ = Registry::default()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
