//! Configuration management for orgadmin

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::ClientOptions;
use crate::client::admin::{DEFAULT_REQUESTS_PER_SECOND, DEFAULT_TIMEOUT_SECS};
use crate::error::{ConfigError, Result};

/// API base URL used when neither flag, environment nor file sets one
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the REST service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// API token sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Client-side request rate cap
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_requests_per_second() -> u32 {
    DEFAULT_REQUESTS_PER_SECOND
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            timeout_secs: default_timeout_secs(),
            requests_per_second: default_requests_per_second(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".orgadmin").join("config.yaml"))
    }

    /// Resolve an explicit path, falling back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load from an explicit path or the default location
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load if present; a missing file yields the defaults.
    ///
    /// Commands can run without `init` as long as the API URL comes from
    /// a flag or the environment.
    pub fn load_or_default_at(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file may hold an API token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Save to an explicit path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Effective API URL: override, then file, then the built-in default.
    pub fn api_url(&self, api_url_override: Option<&str>) -> String {
        api_url_override
            .or(self.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL)
            .to_string()
    }

    /// Build client settings from this configuration
    pub fn client_options(&self, api_url_override: Option<&str>) -> Result<ClientOptions> {
        let api_url = self.api_url(api_url_override);
        if api_url.trim().is_empty() {
            return Err(ConfigError::MissingApiUrl.into());
        }
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "API URL must start with http:// or https://, got '{}'",
                api_url
            ))
            .into());
        }

        Ok(ClientOptions {
            base_url: api_url,
            api_token: self.api_token.clone(),
            timeout: Duration::from_secs(self.preferences.timeout_secs),
            requests_per_second: self.preferences.requests_per_second,
        })
    }
}
