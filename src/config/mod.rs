//! Service configuration layered from defaults, TOML, environment and CLI flags

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::Result;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration for the award interval service
///
/// Values are layered: defaults, then an optional TOML file, then
/// environment variables, then CLI flags. The binary loads `.env` into the
/// process environment before any of this runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub csv_path: Option<PathBuf>,
    pub host: String,
    pub port: u16,
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            csv_path: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: Some("info".to_string()),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the configuration from an optional file plus the environment
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::new(),
        };

        config.merge_env_vars();

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_vars(|name| std::env::var(name).ok());
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(csv_path) = lookup("CSV_PATH").filter(|v| !v.is_empty()) {
            self.csv_path = Some(PathBuf::from(csv_path));
        }

        if let Some(host) = lookup("HOST").filter(|v| !v.is_empty()) {
            self.host = host;
        }

        if let Some(port) = lookup("PORT") {
            match port.parse::<u16>() {
                Ok(value) => self.port = value,
                Err(_) => warn!("Ignoring invalid PORT value '{}'", port),
            }
        }

        if let Some(log_level) = lookup("LOG_LEVEL").filter(|v| !v.is_empty()) {
            self.log_level = Some(log_level);
        }
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    /// Tracing filter for the given `-v` count; the configured level applies at zero
    pub fn log_filter(&self, verbose: u8) -> String {
        match verbose {
            0 => self.log_level().to_string(),
            1 => "debug".to_string(),
            2 => "trace".to_string(),
            _ => "trace,hyper=debug,tower=debug".to_string(),
        }
    }
}
