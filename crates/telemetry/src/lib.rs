//! Logging bootstrap.
//!
//! Diagnostics go to stderr; stdout belongs to the interactive menu.

use anyhow::anyhow;
use libris_kernel::{LogFormat, TelemetrySettings};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive from settings; `verbosity` 1 means debug, 2+ trace.
pub fn filter_directive(settings: &TelemetrySettings, verbosity: u8) -> String {
    match verbosity {
        0 => settings.log_level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. `RUST_LOG` wins unless `verbosity` is set.
pub fn init(settings: &TelemetrySettings, verbosity: u8) -> anyhow::Result<()> {
    let directive = filter_directive(settings, verbosity);
    let env_filter = if verbosity == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive))
    } else {
        EnvFilter::new(&directive)
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match settings.log_format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| anyhow!("failed to initialize tracing: {e}"))?;

    tracing::debug!(
        target: "libris-telemetry",
        format = ?settings.log_format,
        filter = %directive,
        "telemetry initialized"
    );
    Ok(())
}
