//! Opt-in tracing bootstrap.
//!
//! The engine only emits `tracing` events; it never installs a subscriber on
//! its own. Hosts that just want console output can call
//! [`init_default_tracing`]. Anything beyond that (custom layers, file
//! output) should configure `tracing-subscriber` directly and skip this
//! module.

/// Installs a compact stderr subscriber honoring `RUST_LOG`.
///
/// When `RUST_LOG` is unset or unparseable the filter falls back to `info`.
/// Returns `false` without the `telemetry` feature, and also when another
/// subscriber already claimed the global default, so calling this from a
/// library context is harmless.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback("info")
}

/// Same as [`init_default_tracing`] with an explicit fallback directive,
/// e.g. `"roadmap_rs=debug"`.
#[must_use]
pub fn init_tracing_with_fallback(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
