//! Configuration management for geobrief
//!
//! Everything here is read once at startup and treated as immutable for the
//! rest of the run. The orchestrator receives the loaded `Config` and hands
//! each collector its TTL and settings at construction.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cache::{Category, Ttl};
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Cache root; defaults to the platform cache directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// Collection parameters
    #[serde(default)]
    pub collect: CollectConfig,

    /// Per-category cache TTLs in seconds
    #[serde(default)]
    pub ttl: TtlConfig,

    /// Provider credentials and endpoints
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Shared HTTP settings
    #[serde(default)]
    pub http: HttpConfig,
}

/// Parameters that shape the remote requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectConfig {
    /// Region passed to the country registry
    #[serde(default = "default_region")]
    pub region: String,

    /// Base currency for the rate table
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
}

fn default_region() -> String {
    "europe".to_string()
}

fn default_base_currency() -> String {
    "rub".to_string()
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            base_currency: default_base_currency(),
        }
    }
}

/// TTL per category. Zero or negative means "always refetch".
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TtlConfig {
    #[serde(default = "default_ttl_country")]
    pub country: Ttl,
    #[serde(default = "default_ttl_currency_rates")]
    pub currency_rates: Ttl,
    #[serde(default = "default_ttl_weather")]
    pub weather: Ttl,
    #[serde(default = "default_ttl_news")]
    pub news: Ttl,
}

fn default_ttl_country() -> Ttl {
    Ttl::from_secs(7 * 24 * 60 * 60) // 1 week
}

fn default_ttl_currency_rates() -> Ttl {
    Ttl::from_secs(24 * 60 * 60) // 1 day
}

fn default_ttl_weather() -> Ttl {
    Ttl::from_secs(3 * 60 * 60) // 3 hr
}

fn default_ttl_news() -> Ttl {
    Ttl::from_secs(60 * 60) // 1 hr
}

impl Default for TtlConfig {
    fn default() -> Self {
        Self {
            country: default_ttl_country(),
            currency_rates: default_ttl_currency_rates(),
            weather: default_ttl_weather(),
            news: default_ttl_news(),
        }
    }
}

impl TtlConfig {
    /// TTL bucket for a category
    pub fn for_category(&self, category: Category) -> Ttl {
        match category {
            Category::Country => self.country,
            Category::CurrencyRates => self.currency_rates,
            Category::Weather => self.weather,
            Category::News => self.news,
        }
    }

    /// Every TTL set to zero, used for forced refreshes
    pub fn expired() -> Self {
        Self {
            country: Ttl::ZERO,
            currency_rates: Ttl::ZERO,
            weather: Ttl::ZERO,
            news: Ttl::ZERO,
        }
    }
}

/// One entry per provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub country: ProviderConfig,
    #[serde(default)]
    pub currency: ProviderConfig,
    #[serde(default)]
    pub weather: ProviderConfig,
    #[serde(default)]
    pub news: ProviderConfig,
}

/// Credential and optional endpoint override for a single provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Static API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL override (scheme + host), mostly for testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Shared HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Requests per second across all providers
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,

    /// Concurrent per-location refreshes within one collector
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_requests_per_second() -> u32 {
    5
}

fn default_max_concurrent() -> usize {
    8
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            requests_per_second: default_requests_per_second(),
            max_concurrent: default_max_concurrent(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".geobrief").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path or the default location.
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// file that was asked for explicitly is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::load_from(&default)
                } else {
                    log::debug!("No config at {}, using defaults", default.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to an explicit path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // API keys live in here
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Reject settings the collectors cannot work with
    pub fn validate(&self) -> Result<()> {
        let base = self.collect.base_currency.trim();
        if base.is_empty() || !base.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::Invalid(format!(
                "base_currency must be a currency code, got '{}'",
                self.collect.base_currency
            ))
            .into());
        }
        if self.collect.region.trim().is_empty() {
            return Err(ConfigError::Invalid("region must not be empty".to_string()).into());
        }
        if self.http.requests_per_second == 0 {
            return Err(
                ConfigError::Invalid("http.requests_per_second must be positive".to_string())
                    .into(),
            );
        }
        if self.http.max_concurrent == 0 {
            return Err(
                ConfigError::Invalid("http.max_concurrent must be positive".to_string()).into(),
            );
        }
        Ok(())
    }
}
