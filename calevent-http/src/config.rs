//! Client configuration at ~/.config/calevent/config.toml
//!
//! Values in the file are overridden by `CALEVENT_*` environment variables
//! (e.g. `CALEVENT_ACCESS_TOKEN`).

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

static DEFAULT_API_SERVER: &str = "https://api.nylas.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_api_server() -> String {
    DEFAULT_API_SERVER.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root that request paths are joined onto
    #[serde(default = "default_api_server")]
    pub api_server: String,

    #[serde(default)]
    pub access_token: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_server: default_api_server(),
            access_token: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn config_path() -> ClientResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ClientError::Config("Could not determine config directory".into()))?
            .join("calevent");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location plus the environment.
    pub fn load() -> ClientResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path` (optional) plus the environment.
    pub fn load_from(path: &Path) -> ClientResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("CALEVENT").try_parsing(true))
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ClientError::Config(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> ClientResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ClientError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Write a config file with every option commented out.
    pub fn create_default_config(path: &Path) -> ClientResult<()> {
        let contents = format!(
            "\
# calevent configuration

# API root for the scheduling service:
# api_server = \"{}\"

# Access token sent as a bearer token:
# access_token = \"\"

# Request timeout in seconds:
# timeout_secs = {}
",
            DEFAULT_API_SERVER, DEFAULT_TIMEOUT_SECS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClientError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ClientError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
