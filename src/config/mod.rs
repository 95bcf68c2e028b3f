// Configuration module
// Public interface for configuration loading

mod loader;
mod settings;

pub use loader::{load_config, load_config_from, CONFIG_PATH_ENV};
pub use settings::{Config, ServerConfig, DEFAULT_BIND_ADDRESS};
