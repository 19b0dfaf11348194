//! Logger setup

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Install the global logger
///
/// Verbosity counts `-v` flags on top of `base`. `RUST_LOG` overrides both.
/// Calling this more than once is harmless.
pub fn init(verbosity: u8, base: LevelFilter) {
    let level = match (base as usize).saturating_add(usize::from(verbosity)) {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let _ = Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
