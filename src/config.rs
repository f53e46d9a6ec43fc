use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::services::{Credentials, CredentialsError};

/// Errors that prevent the relay from starting
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub shipstation: ShipStationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

#[derive(Clone, Deserialize)]
pub struct ShipStationSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_secret: Option<String>,
    /// Outbound request timeout; unset means no timeout
    pub timeout_secs: Option<u64>,
}

impl Default for ShipStationSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            api_secret: None,
            timeout_secs: None,
        }
    }
}

// Secrets stay out of logs
impl std::fmt::Debug for ShipStationSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShipStationSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String { "https://ssapi.shipstation.com".to_string() }

impl ShipStationSettings {
    /// Validate and take the API credentials
    ///
    /// This is the startup gate: the server must not bind if it fails.
    pub fn credentials(&self) -> Result<Credentials, SettingsError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CredentialsError::Missing("SHIPSTATION_API_KEY"))?;
        let api_secret = self
            .api_secret
            .as_deref()
            .ok_or(CredentialsError::Missing("SHIPSTATION_API_SECRET"))?;

        Ok(Credentials::new(api_key, api_secret)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with RELAY__)
    /// 4. SHIPSTATION_API_KEY, SHIPSTATION_API_SECRET, PORT, LOG_LEVEL, LOG_FORMAT
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RELAY__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RELAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_plain_env(settings)?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("RELAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_plain_env(settings)?;

        Ok(settings.try_deserialize()?)
    }
}

/// Overlay the unprefixed variables deployments already use
///
/// Empty values (`PORT=` in a `.env` file) count as unset.
fn apply_plain_env(settings: Config) -> Result<Config, ConfigError> {
    overlay_plain_env(settings, |name| std::env::var(name).ok())
}

fn overlay_plain_env<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    const PLAIN_VARS: [(&str, &str); 5] = [
        ("SHIPSTATION_API_KEY", "shipstation.api_key"),
        ("SHIPSTATION_API_SECRET", "shipstation.api_secret"),
        ("PORT", "server.port"),
        ("LOG_LEVEL", "logging.level"),
        ("LOG_FORMAT", "logging.format"),
    ];

    let mut builder = Config::builder().add_source(settings);

    for (var, key) in PLAIN_VARS {
        if let Some(value) = lookup(var).filter(|v| !v.is_empty()) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}
