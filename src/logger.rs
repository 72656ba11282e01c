use std::io::{stderr, IsTerminal};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a stderr logger; stdout belongs to the running program.
///
/// Returns false when the host process already has a global subscriber,
/// which is left in place.
pub fn init_logger(verbose: bool) -> bool {
    let default_filter = if verbose { "crux_rt=debug" } else { "crux_rt=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(stderr)
                .with_ansi(stderr().is_terminal())
                .without_time()
                .with_target(verbose)
                .compact(),
        )
        .try_init()
        .is_ok()
}
