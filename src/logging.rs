//! Tracing setup.
//!
//! Output is filtered through `RUST_LOG`, e.g. `RUST_LOG=module_tiles=debug`
//! to see every command, `RUST_LOG=module_tiles::domain=trace` for ignored
//! border writes.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "warn,module_tiles=info";

/// Install the console subscriber. Calling it again is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_line_number(true))
        .with(filter)
        .try_init();
}
