//! Logging setup on the `tracing` ecosystem.
//!
//! Progress goes to stderr so generated output piped from stdout stays clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `--verbose` enables debug output, `--quiet` keeps errors only; otherwise
/// `RUST_LOG` is honored with `info` as the fallback.
pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("p5doc=debug")
    } else if quiet {
        EnvFilter::new("p5doc=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("p5doc=info"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
