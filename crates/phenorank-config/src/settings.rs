use phenorank_common::Locale;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const CONFIG_ENV_VAR: &str = "PHENORANK_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "phenorank.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Prediction backend connection. The password is only held in plain text
/// until it is moved into [`AppSettings`].
#[derive(Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_password")]
    pub password: String,
}

fn default_host()     -> String { "https://localhost/".to_string() }
fn default_port()     -> String { "443".to_string() }
fn default_user()     -> String { "your_username".to_string() }
fn default_password() -> String { "your_password".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: default_password(),
        }
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub locale: Locale,
}

impl Config {
    /// Load configuration from phenorank.toml.
    /// Checks PHENORANK_CONFIG env var first, then current directory.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(PathBuf::from(path)));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.server.validate()?;
        Ok(config)
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "server.host",
                reason: "must not be empty".to_string(),
            });
        }
        self.port.parse::<u16>().map_err(|e| ConfigError::Invalid {
            field: "server.port",
            reason: format!("{:?} is not a TCP port ({e})", self.port),
        })?;
        Ok(())
    }
}

// ── Runtime settings ─────────────────────────────────────────────────────────

/// Connection settings as held by the session. Replaced wholesale by
/// `update_settings`.
pub struct AppSettings {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: SecretString,
}

impl AppSettings {
    pub fn new(
        host: impl Into<String>,
        port: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            user: user.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// `{host}:{port}/api/predict`, with one trailing `/` dropped from host.
    pub fn predict_api_uri(&self) -> String {
        let host = self.host.strip_suffix('/').unwrap_or(&self.host);
        format!("{host}:{}/api/predict", self.port)
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for AppSettings {
    fn from(server: &ServerConfig) -> Self {
        Self::new(
            server.host.clone(),
            server.port.clone(),
            server.user.clone(),
            server.password.clone(),
        )
    }
}

impl Clone for AppSettings {
    fn clone(&self) -> Self {
        Self::new(
            self.host.clone(),
            self.port.clone(),
            self.user.clone(),
            self.password.expose_secret().to_owned(),
        )
    }
}

impl PartialEq for AppSettings {
    fn eq(&self, other: &Self) -> bool {
        self.host == other.host
            && self.port == other.port
            && self.user == other.user
            && self.password.expose_secret() == other.password.expose_secret()
    }
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password)
            .finish()
    }
}
