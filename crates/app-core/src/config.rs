//! Application configuration
//!
//! The configuration is a single immutable record built once at startup.
//! Only the display name comes from the environment; locale and text
//! direction are fixed for the Persian build.
//!
//! # Usage
//!
//! ```rust
//! use app_core::config::AppConfig;
//!
//! let config = AppConfig::from_name(Some("Todo".to_string())).unwrap();
//! assert_eq!(config.name(), "Todo");
//! assert_eq!(config.locale().to_string(), "fa-IR");
//! assert!(config.direction().is_rtl());
//! ```

use i18n::{Locale, TextDirection};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the application display name
pub const APP_NAME_VAR: &str = "APP_NAME";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The application name is absent or empty
    #[error("Missing required configuration: {0} must be set to a non-empty value")]
    MissingAppName(&'static str),

    /// An explicit `.env` file could not be read
    #[error("Failed to read environment file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Process-wide application configuration
///
/// Only constructible through [`AppConfig::from_name`] and the loaders built
/// on it, deserialization included: the name is never empty and the
/// locale and direction are always `fa-IR` and `rtl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAppConfig")]
pub struct AppConfig {
    name: String,
    locale: Locale,
    direction: TextDirection,
}

/// Serialized form; locale and direction are read but not trusted
#[derive(Deserialize)]
struct RawAppConfig {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "locale")]
    _locale: Option<Locale>,
    #[serde(default, rename = "direction")]
    _direction: Option<TextDirection>,
}

impl TryFrom<RawAppConfig> for AppConfig {
    type Error = ConfigError;

    fn try_from(raw: RawAppConfig) -> Result<Self> {
        Self::from_name(raw.name)
    }
}

impl AppConfig {
    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locale identifier (always `fa-IR`)
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Text direction (always right-to-left)
    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    /// Build the configuration from a display name
    ///
    /// Fails when the name is absent, empty or only whitespace.
    pub fn from_name(name: Option<String>) -> Result<Self> {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(ConfigError::MissingAppName(APP_NAME_VAR))?;

        Ok(Self {
            name,
            locale: Locale::persian(),
            direction: TextDirection::Rtl,
        })
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        Self::from_name(lookup(APP_NAME_VAR))
    }

    /// Load the configuration from the process environment
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }

        let config = Self::from_lookup(|key| dotenvy::var(key).ok())?;
        tracing::info!(
            name = %config.name,
            locale = %config.locale,
            direction = %config.direction,
            "Application configuration loaded"
        );
        Ok(config)
    }

    /// Load the configuration from a `.env` file only
    ///
    /// The process environment is neither read nor modified.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut name = None;
        for item in dotenvy::from_path_iter(path.as_ref())? {
            let (key, value) = item?;
            if key == APP_NAME_VAR {
                name = Some(value);
            }
        }
        Self::from_name(name)
    }
}
