use crate::domain::ports::SmsConfigProvider;
use crate::utils::error::{NotairesError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::Deserialize;
use std::env;
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://www.aqilas.com";
pub const DEFAULT_SENDER: &str = "NOTAIRES";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Aqilas gateway settings. Loaded from a TOML file and/or the same
/// environment variables the backend settings use (AQILAS_*).
#[derive(Debug, Clone, Deserialize)]
pub struct SmsConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_secret: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_sender")]
    pub sender: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_sender() -> String {
    DEFAULT_SENDER.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            api_secret: None,
            token: None,
            sender: default_sender(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl SmsConfig {
    /// Read a TOML file, then let AQILAS_* environment variables override it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let mut config: SmsConfig =
            toml::from_str(&raw).map_err(|e| NotairesError::ConfigError {
                message: format!("fichier TOML invalide: {}", e),
            })?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Build entirely from AQILAS_* environment variables.
    pub fn from_env() -> Self {
        let mut config = SmsConfig::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Some(v) = non_empty_env("AQILAS_API_KEY") {
            self.api_key = Some(v);
        }
        if let Some(v) = non_empty_env("AQILAS_API_SECRET") {
            self.api_secret = Some(v);
        }
        if let Some(v) = non_empty_env("AQILAS_TOKEN") {
            self.token = Some(v);
        }
        if let Some(v) = non_empty_env("AQILAS_SENDER") {
            self.sender = v;
        }
        if let Some(v) = non_empty_env("AQILAS_TIMEOUT") {
            match v.parse() {
                Ok(seconds) => self.timeout_seconds = seconds,
                Err(_) => tracing::warn!("AQILAS_TIMEOUT ignoré (valeur non numérique: {})", v),
            }
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Validate for SmsConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("sender", &self.sender)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;

        if self.api_key().is_none() && self.token().is_none() {
            return Err(NotairesError::ConfigError {
                message: "aucune configuration SMS trouvée (ni API_KEY ni TOKEN)".to_string(),
            });
        }
        Ok(())
    }
}

impl SmsConfigProvider for SmsConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|v| !v.trim().is_empty())
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|v| !v.trim().is_empty())
    }

    fn sender(&self) -> &str {
        &self.sender
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}
