// Configuration structs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Optional JSON file replacing the built-in crisis keyword table
    #[serde(default)]
    pub keywords_path: Option<PathBuf>,

    /// Raise the default log level to debug (RUST_LOG still wins)
    #[serde(default)]
    pub debug_logging: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:5000")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Origins allowed by CORS. Empty allows any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_allowed_origins: vec![],
        }
    }
}
