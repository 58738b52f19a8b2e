use tracing_subscriber::EnvFilter;

/// Use RUST_LOG, fallback to info if not set or invalid.
///
/// Safe to call more than once: later calls keep the subscriber already installed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
