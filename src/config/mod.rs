//! Configuration loading.
//!
//! Settings live in `<config_dir>/hello-mvi/config.toml`. A missing file
//! means defaults; command-line flags override file values.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, UiConfig};
