// src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global fmt subscriber on stderr.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ecdc_sync=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}
