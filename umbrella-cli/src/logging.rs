use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` wins over the `-v` count.
///
/// Logs go to stderr; stdout only carries the recommendation.
pub fn init(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "umbrella_core=info,umbrella=info",
        _ => "umbrella_core=debug,umbrella=debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
