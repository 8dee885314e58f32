use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional verbose mode.
///
/// When `verbose` is false (default), only error-level events are emitted.
/// When `verbose` is true, info-level and above events are emitted.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "error" };

    let mut filter = EnvFilter::from_default_env();
    for target in ["winctl", "winctl_core"] {
        filter = filter.add_directive(
            format!("{}={}", target, level)
                .parse()
                .expect("Invalid log directive"),
        );
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
