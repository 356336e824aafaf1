use tracing::Level;
use tracing_subscriber::filter::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` directives apply on top of the default level, which is `debug`
/// when `verbose` is set and `info` otherwise.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    // `try_init` only fails if a subscriber was already set. Ignore that case
    // so tests can call `init` more than once.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .try_init();
}
