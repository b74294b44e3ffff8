//! Telemetry helpers for dashboards embedding `dashboard-charts`.
//!
//! Tracing setup stays explicit and opt-in. Hosts either call one of the
//! helpers below or install their own `tracing` subscriber.

/// Initializes a compact `tracing` subscriber filtered at `info` unless
/// `RUST_LOG` says otherwise.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directives("info")
}

/// Same as [`init_default_tracing`] with caller-provided fallback directives,
/// e.g. `"dashboard_charts=trace"` while debugging engine lifecycle.
#[must_use]
pub fn init_tracing_with_directives(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directives));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}
