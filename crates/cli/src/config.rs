use std::path::PathBuf;

use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use faucet_ethereum::EthConfig;

/// Top level config layout
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub eth: EthConfig,
}

impl Config {
    const DEFAULT_PATH: &str = "~/.config/faucet/config.toml";

    /// Load the config, filling in missing values with defaults, and writing to disk after.
    pub fn load(path: Option<impl Into<PathBuf>>) -> Result<Self> {
        let path = path.map(|v| v.into()).unwrap_or(Self::DEFAULT_PATH.into());
        let path = path.resolve().to_path_buf();
        debug!(config_path = ?path);

        // Read config or get the default. A file that fails to parse is left untouched.
        let config = match std::fs::read_to_string(&path) {
            Ok(s) => toml::from_str(&s).wrap_err_with(|| format!("Failed to parse {path:?}"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => bail!("Failed to read configuration from {path:?}: {e}"),
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    bail!("Failed to create configuration directory {parent:?}: {e}");
                }
            }
        }

        // Write config (with potentially new items)
        if let Err(e) = std::fs::write(&path, toml::to_string_pretty(&config)?) {
            bail!("Failed to write configuration to {path:?}: {e}");
        }

        Ok(config)
    }
}
