//! Diagnostic logging via `tracing`.
//!
//! Output goes to stderr so it never mixes with `--list` output. The level
//! defaults to `warn`, `--debug` raises it to `debug`, and `RUNX_LOG`
//! (an `EnvFilter` directive) overrides both.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `runx=trace`.
pub const LOG_ENV: &str = "RUNX_LOG";

/// Default filter directive for the given verbosity.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "runx=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    // A second install (tests) is not an error worth surfacing.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .without_time()
        .try_init();
}
