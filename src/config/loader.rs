// Configuration loader
// Layers built-in defaults, ~/.mindful-chat/config.toml, and MINDFUL_CHAT__* environment variables

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::settings::Config;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "MINDFUL_CHAT_CONFIG";

const ENV_PREFIX: &str = "MINDFUL_CHAT";

/// Load configuration from the config file (if any) and environment
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    load_config_from(path.as_deref())
}

/// Load configuration from a specific file (if any) and environment.
/// A missing default file is fine; an explicitly named file must exist.
pub fn load_config_from(path: Option<&Path>) -> Result<Config> {
    let mut builder = ::config::Config::builder();

    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "Loading config file");
        builder = builder.add_source(
            ::config::File::new(&path.to_string_lossy(), ::config::FileFormat::Toml)
                .required(true),
        );
    }

    let settings = builder
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.cors_allowed_origins")
                .try_parsing(true),
        )
        .build()
        .context("Failed to read configuration")?;

    settings
        .try_deserialize::<Config>()
        .context("Failed to parse configuration")
}

/// Resolve which config file to read, if any
fn config_path() -> Result<Option<PathBuf>> {
    if let Ok(explicit) = std::env::var(CONFIG_PATH_ENV) {
        if !explicit.is_empty() {
            return Ok(Some(PathBuf::from(explicit)));
        }
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    let default_path = home.join(".mindful-chat/config.toml");

    Ok(default_path.exists().then_some(default_path))
}
