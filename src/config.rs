//! Application configuration.
//!
//! Configuration is stored in `config.yaml` inside the triage config
//! directory and includes:
//! - The ticket backend endpoint
//! - The HTTP request timeout

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};

/// Ticket collection endpoint used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api/tickets";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "TRIAGE_CONFIG_DIR";

/// Environment variable overriding the configured endpoint
pub const API_URL_ENV: &str = "TRIAGE_API_URL";

/// Keys accepted by `config get` / `config set`
pub const VALID_CONFIG_KEYS: &[&str] = &["api_url", "request_timeout"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ticket collection endpoint (list/create; resolve is `{api_url}/{id}/resolve`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// HTTP request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            request_timeout: default_request_timeout(),
        }
    }
}

/// Returns the directory holding `config.yaml` and the TUI log file.
///
/// Resolution order:
/// 1. `TRIAGE_CONFIG_DIR` environment variable (if set)
/// 2. Platform config directory for `triage`
/// 3. `.triage` in the current working directory
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }

    ProjectDirs::from("", "", "triage")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".triage"))
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        config_dir().join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            TriageError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TriageError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            TriageError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, permissions)?;
        }

        Ok(())
    }

    /// Backend endpoint: `TRIAGE_API_URL` first, then the config file, then the default
    pub fn api_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }

        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Set the backend endpoint after checking it looks like an HTTP URL
    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(TriageError::Config(format!(
                "invalid api_url '{url}'. Expected an http:// or https:// URL"
            )));
        }
        self.api_url = Some(url.to_string());
        Ok(())
    }

    pub fn set_request_timeout(&mut self, value: &str) -> Result<()> {
        let secs = value.parse::<u64>().map_err(|_| {
            TriageError::Config(format!(
                "invalid value '{value}' for request_timeout. Expected a number of seconds"
            ))
        })?;
        if secs == 0 {
            return Err(TriageError::Config(
                "request_timeout must be at least 1 second".to_string(),
            ));
        }
        self.request_timeout = secs;
        Ok(())
    }
}
