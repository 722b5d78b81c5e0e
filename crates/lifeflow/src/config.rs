//! Credential and endpoint configuration.
//!
//! The API token is looked up in this order:
//!
//! 1. `--token` / `TODOIST_API_TOKEN`
//! 2. the file passed with `--config`
//! 3. `./config.json`
//! 4. `<config dir>/lifeflow/config.json`
//!
//! Config files are JSON: `{"token": "...", "api_base": "..."}` with
//! `api_base` optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{FlowError, Result};
use crate::todoist::client::API_BASE_URL;

/// Config file name searched in the working and user config directories.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub api_base: String,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    token: Option<String>,
    api_base: Option<String>,
}

impl ConfigFile {
    fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FlowError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| FlowError::Config(format!("Invalid config file {}: {e}", path.display())))
    }
}

/// Overrides taken from the command line or environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub token: Option<String>,
    pub config_path: Option<PathBuf>,
    pub api_base: Option<String>,
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_base: API_BASE_URL.to_string(),
        }
    }

    /// Resolve configuration using the default search paths.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let mut search = Vec::new();
        if let Some(path) = &overrides.config_path {
            search.push(path.clone());
        }
        search.push(PathBuf::from(CONFIG_FILE_NAME));
        if let Some(dir) = dirs::config_dir() {
            search.push(dir.join("lifeflow").join(CONFIG_FILE_NAME));
        }

        Self::resolve_from(overrides, &search)
    }

    /// Resolve configuration from explicit overrides and candidate files.
    ///
    /// An explicitly requested config file must exist; the remaining
    /// candidates are skipped when absent.
    pub fn resolve_from(overrides: ConfigOverrides, search: &[PathBuf]) -> Result<Self> {
        let mut file = ConfigFile::default();

        if let Some(path) = &overrides.config_path {
            if !path.exists() {
                return Err(FlowError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
        }

        if let Some(path) = search.iter().find(|p| p.exists()) {
            debug!(path = %path.display(), "Loading config file");
            file = ConfigFile::load(path)?;
        }

        let token = overrides
            .token
            .filter(|t| !t.trim().is_empty())
            .or(file.token.filter(|t| !t.trim().is_empty()))
            .ok_or_else(|| {
                let searched: Vec<String> =
                    search.iter().map(|p| p.display().to_string()).collect();
                FlowError::Config(format!(
                    "No Todoist API token found. Set TODOIST_API_TOKEN, pass --token, \
                     or add a \"token\" to one of: {}",
                    searched.join(", ")
                ))
            })?;

        let api_base = overrides
            .api_base
            .or(file.api_base)
            .unwrap_or_else(|| API_BASE_URL.to_string());

        Ok(Self { token, api_base })
    }
}
