//! Diagnostic logging setup
//!
//! All diagnostics go to stderr: stdout stays untouched so shell pipelines
//! and the engine's captured output are never polluted. ANSI is disabled so
//! redirected logs stay readable.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize stderr logging.
///
/// The log level can be controlled via the `level` parameter or the
/// `RUST_LOG` environment variable (which takes precedence).
pub fn init(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("fusesweep={level},fusesweep_core={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    Ok(())
}
