use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber so stdout stays reserved for generated
/// values. Filtering follows `RUST_LOG`; silent by default.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
