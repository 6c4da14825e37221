use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` wins over the configured
/// filter; `verbose` raises the ganzhi crates to debug.
pub fn init(config_filter: &str, verbose: bool) {
    let fallback = if verbose {
        format!("{config_filter},ganzhi=debug")
    } else {
        config_filter.to_string()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
