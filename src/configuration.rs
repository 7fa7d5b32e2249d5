use std::path::PathBuf;
use std::{env, time};

use anyhow::Context;
use config::{Config, ConfigError, Environment, File};
use secrecy::{ExposeSecret, SecretString};
use url::{ParseError, Url};

use crate::provider_client::ProviderClient;

/// Settings
#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub provider: ProviderSettings,
    pub content_path: PathBuf,
}

impl Settings {
    /// Get settings from configuration files
    pub fn get_config() -> Result<Self, ConfigError> {
        let path = env::current_dir().expect("Failed to determine the current directory");
        let config_dir = path.join("config");

        // Detect the running environment (default: `dev`)
        let env: Env = env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "dev".into())
            .try_into()
            .map_err(ConfigError::Message)?;

        // Read the configuration from files and environment variables
        Config::builder()
            // Base configuration file
            .add_source(File::from(config_dir.join("base.yaml")).required(true))
            // Environment-specific configuration file
            .add_source(File::from(config_dir.join(env.as_str())).required(true))
            // Environment variables (e.g., `PORTFOLIO__APPLICATION__APP_PORT=8888`
            // would set Settings.application.app_port to 8888)
            .add_source(Environment::with_prefix("PORTFOLIO").separator("__"))
            .build()?
            .try_deserialize()
    }
}

/// Get settings from configuration files
pub fn get_config() -> Result<Settings, ConfigError> {
    Settings::get_config()
}

/// Application settings
#[derive(Clone, serde::Deserialize)]
pub struct ApplicationSettings {
    pub app_host: String,
    pub app_port: u16,
}

/// Email-marketing provider settings
#[derive(Clone, serde::Deserialize)]
pub struct ProviderSettings {
    /// Form action URL; it embeds the provider's form token, so it stays out of logs
    pub action_url: SecretString,
    /// Outbound request timeout; the transport default applies when unset
    pub timeout_millis: Option<u64>,
}

impl ProviderSettings {
    /// Build the provider client
    pub fn client(&self) -> anyhow::Result<ProviderClient> {
        let action_url = self.action_url().context("Invalid provider action URL")?;
        ProviderClient::new(action_url, self.timeout()).context("Failed to build the HTTP client")
    }

    /// Parse action URL
    pub fn action_url(&self) -> Result<Url, ParseError> {
        Url::parse(self.action_url.expose_secret())
    }

    /// Get configured timeout
    pub fn timeout(&self) -> Option<time::Duration> {
        self.timeout_millis.map(time::Duration::from_millis)
    }
}

/// Available runtime environments
#[derive(Debug)]
pub enum Env {
    Development,
    Production,
}

impl Env {
    /// Represent environment as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "dev",
            Self::Production => "prd",
        }
    }
}

impl TryFrom<String> for Env {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "dev" => Ok(Self::Development),
            "prd" => Ok(Self::Production),
            other => Err(format!(
                "`{other}` is not a supported environment. Use either `dev` or `prd`"
            )),
        }
    }
}
