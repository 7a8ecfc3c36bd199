//! Log output to stderr via `tracing-subscriber`.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or library
/// debug events as well with `--verbose`.
pub fn init(verbose: bool) {
    let default = if verbose {
        "warn,i18n_coverage=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
