//! Tracing subscriber setup for the binary. The library only emits events.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter comes from `LABKIT_LOG`, then `RUST_LOG`, then the verbosity flag.
pub fn init_cli_logger(verbose: bool) {
    let fallback = if verbose { "labkit=trace" } else { "labkit=warn" };
    let filter = EnvFilter::try_from_env("LABKIT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
