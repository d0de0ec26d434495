//! Parameter overrides from a RON file, re-applied whenever the file changes.

mod config_error;
mod config_watcher;
mod overrides;

pub use config_watcher::ConfigWatcher;
#[cfg(test)]
pub use {config_error::ConfigError, overrides::Overrides};
