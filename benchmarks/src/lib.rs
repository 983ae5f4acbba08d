mod args;
pub use args::MidbenchArgs;

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// Without `-v`, the filter comes from `RUST_LOG` and defaults to
/// warnings. Each `-v` raises the level: info, debug, then trace.
/// Colors are only used when stderr is a terminal.
pub fn init_logging(verbosity: u64) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
