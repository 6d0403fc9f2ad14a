//! Logging initialization

/// Initialize the global logger
///
/// Defaults to `info` level; override with the `RUST_LOG` environment
/// variable. Called once at the top of each binary.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
