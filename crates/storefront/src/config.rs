//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_DATABASE_URL` - `PostgreSQL` connection string (session store)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront
//! - `SHOP_API_URL` - Base URL of the catalog/cart backend (e.g., <http://localhost:5000/>)
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `SHOP_API_CACHE_TTL_SECS` - Catalog response cache lifetime (default: 300)
//! - `CAROUSEL_INTERVAL_SECS` - Hero carousel auto-advance period (default: 15)
//! - `STOREFRONT_REDUCED_MOTION` - Disable entrance animations (default: false)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use pocketshop_core::{AnimationConfig, SortKey};
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_CAROUSEL_INTERVAL_SECS: u64 = 15;
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Catalog/cart backend configuration
    pub shop_api: ShopApiConfig,
    /// Home page behaviour
    pub home: HomeSettings,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "production")
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

/// Catalog/cart backend configuration.
#[derive(Debug, Clone)]
pub struct ShopApiConfig {
    /// Base URL, always ending in `/` so relative endpoints join beneath it.
    pub base_url: Url,
    /// Lifetime of cached catalog responses.
    pub cache_ttl: Duration,
}

/// Home page behaviour.
#[derive(Debug, Clone, Copy)]
pub struct HomeSettings {
    /// Period of the hero carousel auto-advance.
    pub carousel_interval: Duration,
    /// Ordering of the featured product grid.
    pub featured_sort: SortKey,
    /// Entrance animation timings.
    pub animation: AnimationConfig,
}

impl Default for HomeSettings {
    fn default() -> Self {
        Self {
            carousel_interval: Duration::from_secs(DEFAULT_CAROUSEL_INTERVAL_SECS),
            featured_sort: SortKey::PriceLowToHigh,
            animation: AnimationConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("STOREFRONT_DATABASE_URL")?;
        let host = parse_env("STOREFRONT_HOST", "127.0.0.1")?;
        let port = parse_env("STOREFRONT_PORT", "3000")?;
        let base_url = get_required_env("STOREFRONT_BASE_URL")?;

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            shop_api: ShopApiConfig::from_env()?,
            home: HomeSettings::from_env()?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_env("SENTRY_SAMPLE_RATE", "1.0")?,
            sentry_traces_sample_rate: parse_env("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS (secure cookies).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl ShopApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = get_required_env("SHOP_API_URL")?;
        let base_url = normalize_base_url(&raw)
            .map_err(|e| ConfigError::InvalidEnvVar("SHOP_API_URL".to_string(), e.to_string()))?;
        let ttl_secs: u64 = parse_env("SHOP_API_CACHE_TTL_SECS", "300")?;

        Ok(Self {
            base_url,
            cache_ttl: Duration::from_secs(ttl_secs),
        })
    }

    /// Build a config for a known base URL with the default cache lifetime.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        })
    }
}

impl HomeSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let interval_secs: u64 = parse_env("CAROUSEL_INTERVAL_SECS", "15")?;
        if interval_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "CAROUSEL_INTERVAL_SECS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let reduced_motion: bool = parse_env("STOREFRONT_REDUCED_MOTION", "false")?;
        let animation = if reduced_motion {
            AnimationConfig::reduced()
        } else {
            AnimationConfig::default()
        };

        Ok(Self {
            carousel_interval: Duration::from_secs(interval_secs),
            animation,
            ..Self::default()
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a base URL and make sure it ends with `/`.
///
/// `Url::join` replaces the last path segment unless the base ends in a slash,
/// so `http://host/v1` would otherwise resolve `api/x` to `http://host/api/x`.
fn normalize_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable (or its default) into `T`.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> StorefrontConfig {
        StorefrontConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            shop_api: ShopApiConfig::new("http://localhost:5000").unwrap(),
            home: HomeSettings::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }

    #[test]
    fn test_socket_addr() {
        let addr = test_config().socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_is_secure() {
        let mut config = test_config();
        assert!(!config.is_secure());
        config.base_url = "https://shop.example.com".to_string();
        assert!(config.is_secure());
    }

    #[test]
    fn test_normalize_base_url_appends_slash() {
        let url = normalize_base_url("http://localhost:5000/v1").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/v1/");
        assert_eq!(
            url.join("api/common/feature/get").unwrap().as_str(),
            "http://localhost:5000/v1/api/common/feature/get"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_root() {
        let url = normalize_base_url("http://localhost:5000").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/");
    }

    #[test]
    fn test_normalize_base_url_rejects_relative() {
        assert!(normalize_base_url("localhost").is_err());
    }

    #[test]
    fn test_home_settings_default() {
        let settings = HomeSettings::default();
        assert_eq!(settings.carousel_interval, Duration::from_secs(15));
        assert_eq!(settings.featured_sort, SortKey::PriceLowToHigh);
    }

    #[test]
    fn test_config_debug_redacts_database_url() {
        let debug_output = format!("{:?}", test_config());
        assert!(!debug_output.contains("postgres://localhost/test"));
    }
}
