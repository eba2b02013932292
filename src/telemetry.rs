//! Opt-in tracing setup for hosts embedding `rating-chart-rs`.
//!
//! Nothing here runs implicitly: hosts either call
//! [`init_default_tracing`] or wire their own `tracing` subscriber.

/// Installs a compact `tracing` subscriber when the `telemetry` feature is
/// enabled, honoring `RUST_LOG` and defaulting to `info`.
///
/// Returns `false` when the feature is disabled or another subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(default_env_filter())
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(feature = "telemetry")]
fn default_env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}
