use tracing_subscriber::EnvFilter;

/// Sets up tracing once for the entire application. `RUST_LOG` overrides
/// the default `info` filter.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
