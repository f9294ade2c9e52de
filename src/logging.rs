//! Logger setup for binaries. The library itself only emits through `log`.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs `env_logger` as the global logger.
///
/// Filter directives are read from `RUST_LOG` (e.g. `rectclip=trace`), falling
/// back to `default_level`. Returns false when a logger is already installed,
/// whether by an earlier call or by the host application; that logger is kept.
pub fn init_logging(default_level: LevelFilter) -> bool {
    let env = Env::default().default_filter_or(default_level.as_str());
    let installed = Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
        .is_ok();

    if installed {
        log::debug!("logging initialized, default level {default_level}");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_existing_logger() {
        init_logging(LevelFilter::Info);
        assert!(!init_logging(LevelFilter::Trace));
    }
}
