//! Tracing setup for the command-line front end.
//!
//! The library only emits events through `tracing` macros; the binary calls
//! [`init`] once at startup to install a subscriber that writes to stderr.

use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
};

/// Default level for the given verbosity flags.
pub fn default_level(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else if quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::WARN
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the default level chosen from the flags.
pub fn init(verbose: bool, quiet: bool) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose, quiet).into())
        .with_env_var("RUST_LOG")
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
