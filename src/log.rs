#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Logging setup for the `crossword` binary.

use log::LevelFilter;

/// Initialises the `env_logger` backend.
///
/// The level is `Debug` when `debug_enabled` is set and `Info` otherwise.
/// An explicit `RUST_LOG` overrides both. Calling this more than once is harmless.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialised at {level:?} level");
    }
}
