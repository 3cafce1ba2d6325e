//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Default filter when `RUST_LOG` is unset.
fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info,tower_http=warn"
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the debug flag.
pub fn init_tracing(debug: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .try_init()
        .ok(); // Ignore error if already initialized
}
