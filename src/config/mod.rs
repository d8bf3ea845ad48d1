//! Configuration management for ceylon-fav.
//!
//! Configuration is read from `~/.config/ceylon-fav/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{ResourceFamily, Session};

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub web: WebConfig,
    pub session: SessionConfig,
    /// Resource families keyed by name. Replaces the built-in set when present.
    pub resources: BTreeMap<String, ResourceFamily>,
}

impl Default for Config {
    fn default() -> Self {
        let resources = [ResourceFamily::destinations(), ResourceFamily::locations()]
            .into_iter()
            .map(|family| (family.name.clone(), family))
            .collect();

        Self {
            api: ApiConfig::default(),
            web: WebConfig::default(),
            session: SessionConfig::default(),
            resources,
        }
    }
}

/// REST API client settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout in seconds (default: 10)
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_secs: 10,
            user_agent: concat!("ceylon-fav/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Where the marketplace web front end lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub base_url: String,
    pub login_route: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5173".to_string(),
            login_route: "/login".to_string(),
        }
    }
}

impl WebConfig {
    /// Absolute URL of a front-end route.
    pub fn route_url(&self, route: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            route.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub user_id: Option<String>,
    pub token: Option<String>,
}

impl SessionConfig {
    pub fn session(&self) -> Option<Session> {
        Session::from_parts(self.user_id.clone(), self.token.clone())
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;

        // Table keys double as family names.
        for (name, family) in config.resources.iter_mut() {
            family.name = name.clone();
        }

        Ok(config)
    }

    /// Look up a resource family by name.
    pub fn resource(&self, name: &str) -> Option<&ResourceFamily> {
        self.resources.get(name)
    }

    /// Get the default config file path: `~/.config/ceylon-fav/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("ceylon-fav").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# ceylon-fav configuration

[api]
# Base URL of the marketplace REST API
base_url = "http://localhost:5000/api"

# Request timeout in seconds
timeout_secs = 10

[web]
# Marketplace front end, used for the login redirect
base_url = "http://localhost:5173"
login_route = "/login"

[session]
# Credentials issued by the marketplace. Can also be passed with
# --user/--token or CEYLON_FAV_USER/CEYLON_FAV_TOKEN.
# user_id = ""
# token = ""

# Each resource family exposes:
#   GET    {prefix}/check/{id}
#   POST   {prefix}          body: { "<body_key>": "<id>" }
#   DELETE {prefix}/{id}

[resources.destination]
prefix = "/favorites"
body_key = "destinationId"

[resources.location]
prefix = "/location-favorites"
body_key = "locationId"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
