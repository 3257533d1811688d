//! Logging setup for the CLI.
//!
//! All diagnostics go to stderr so stdout stays clean for the filtered list.
//! `RUST_LOG` takes precedence over the `-q`/`-v` flags when set.

use tracing_subscriber::EnvFilter;

/// Build the log filter from the CLI verbosity flags.
pub fn env_filter(quiet: bool, verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the stderr subscriber. Call once at startup.
pub fn init(filter: EnvFilter) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))
}
