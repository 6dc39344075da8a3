//! Logging setup shared by the binaries

use tracing_subscriber::EnvFilter;

/// Install the stderr fmt subscriber, `sparky_import=info` unless `RUST_LOG` says otherwise
///
/// Panics if a global subscriber is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sparky_import=info".parse()?))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
