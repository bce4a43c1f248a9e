//! Logger setup.

use env_logger::Env;

/// Initialise `env_logger` on stderr. `RUST_LOG` wins over the default filter,
/// which is `warn`, or `debug` with `--verbose`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .try_init();
    log::debug!("log level default: {default_level}");
}
