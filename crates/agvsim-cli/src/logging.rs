//! Wires the CLI's `-v`/`-vv`/`--quiet` flags to `tracing_subscriber`.

use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

pub fn init(verbosity: Verbosity) {
    let filter = match verbosity {
        Verbosity::Quiet => "warn",
        Verbosity::Normal => "info",
        Verbosity::Verbose => "debug",
        Verbosity::VeryVerbose => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .without_time()
        .init();
}
