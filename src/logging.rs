use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug output for this crate.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "seasonal_diet_rs=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (e.g. from tests) is harmless.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(false)
        .try_init();
}
