//! Tracing subscriber initialization.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with an env-filtered fmt layer.
///
/// The subscriber respects the `RUST_LOG` environment variable. Call once
/// at process start; repeated initialization returns an error from the
/// subscriber registry.
///
/// # Errors
///
/// Returns error if subscriber initialization fails.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_filter(EnvFilter::from_default_env());

    tracing_subscriber::registry().with(fmt_layer).try_init()?;

    Ok(())
}
