use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber; RUST_LOG overrides the default level.
///
/// Logs go to stderr so sequence output on stdout stays pipeable.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(crate::utils::consts::LOG_LEVEL))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}
