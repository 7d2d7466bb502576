//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Remote store (hosted backend) configuration.
    pub store: StoreConfig,
    /// Application-level settings.
    #[serde(default)]
    pub app: AppSettings,
    /// Trip cover-image catalog.
    #[serde(default)]
    pub covers: CoverConfig,
}

/// Remote store configuration.
///
/// The hosted backend owns persistence, auth, and row-level access
/// control; this crate only needs to know where it lives.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the hosted backend project.
    pub url: String,
    /// Publishable (anonymous) API key.
    pub anon_key: String,
    /// Database schema exposed over the REST interface.
    #[serde(default = "default_schema")]
    pub schema: String,
}

fn default_schema() -> String {
    "public".to_string()
}

/// Application-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Base URL used when building shareable invite links.
    #[serde(default = "default_invite_base_url")]
    pub invite_base_url: String,
    /// Base currency preselected for new trips.
    #[serde(default)]
    pub default_currency: Currency,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            invite_base_url: default_invite_base_url(),
            default_currency: Currency::default(),
        }
    }
}

fn default_invite_base_url() -> String {
    "http://localhost:3000".to_string()
}

/// Cover-image catalog configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CoverConfig {
    /// Hosted photo ids a trip cover is deterministically picked from.
    #[serde(default = "default_catalog")]
    pub catalog: Vec<String>,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
        }
    }
}

fn default_catalog() -> Vec<String> {
    [
        "photo-1476514525535-07fb3b4ae5f1",
        "photo-1469854523086-cc02fe5d8800",
        "photo-1488646953014-85cb44e25828",
        "photo-1507525428034-b723cf961d3e",
        "photo-1519681393784-d120267933ba",
        "photo-1502602898657-3e91760cbb34",
        "photo-1523906834658-6e24ef2386f9",
        "photo-1493246507139-91e8fad9978e",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TRIPMATE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
