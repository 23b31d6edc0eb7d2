//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MEDUSA_BACKEND_URL` - Base URL of the commerce backend (e.g., <http://localhost:9000>)
//! - `MEDUSA_PUBLISHABLE_KEY` - Store API publishable key (`pk_...`)
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 8000)
//! - `STOREFRONT_NAME` - Store name shown in the footer (default: Medusa Store)
//! - `STOREFRONT_DEFAULT_COUNTRY` - Country used for `/` (default: us)
//! - `STOREFRONT_PRODUCTS_PER_PAGE` - Product grid page size (default: 12)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0-1.0 (default: 0.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use medusa_storefront_core::CountryCode;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;
const PUBLISHABLE_KEY_PREFIX: &str = "pk_";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Store name shown in the side menu footer
    pub store_name: String,
    /// Country that `/` redirects to
    pub default_country: CountryCode,
    /// Product grid page size
    pub products_per_page: usize,
    /// Commerce backend configuration
    pub medusa: MedusaConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "production")
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

/// Commerce backend Store API configuration.
///
/// Implements `Debug` manually to redact the publishable key.
#[derive(Clone)]
pub struct MedusaConfig {
    /// Backend base URL; Store API routes are resolved against it
    pub backend_url: Url,
    /// Publishable API key sent as `x-publishable-api-key`
    pub publishable_key: SecretString,
}

impl std::fmt::Debug for MedusaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MedusaConfig")
            .field("backend_url", &self.backend_url.as_str())
            .field("publishable_key", &"[REDACTED]")
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid, or
    /// if the publishable key fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env("STOREFRONT_HOST", "127.0.0.1")?;
        let port = parse_env("STOREFRONT_PORT", "8000")?;
        let store_name = get_env_or_default("STOREFRONT_NAME", "Medusa Store");
        let default_country =
            CountryCode::parse(&get_env_or_default("STOREFRONT_DEFAULT_COUNTRY", "us")).map_err(
                |e| ConfigError::InvalidEnvVar("STOREFRONT_DEFAULT_COUNTRY".to_string(), e.to_string()),
            )?;
        let products_per_page: usize = parse_env("STOREFRONT_PRODUCTS_PER_PAGE", "12")?;
        if products_per_page == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STOREFRONT_PRODUCTS_PER_PAGE".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        let medusa = MedusaConfig::from_env()?;

        Ok(Self {
            host,
            port,
            store_name,
            default_country,
            products_per_page,
            medusa,
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
}

impl MedusaConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw_url = get_required_env("MEDUSA_BACKEND_URL")?;
        let backend_url = Url::parse(&raw_url).map_err(|e| {
            ConfigError::InvalidEnvVar("MEDUSA_BACKEND_URL".to_string(), e.to_string())
        })?;
        let publishable_key = get_required_secret("MEDUSA_PUBLISHABLE_KEY")?;
        validate_publishable_key(&publishable_key, "MEDUSA_PUBLISHABLE_KEY")?;

        Ok(Self {
            backend_url,
            publishable_key,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable (or its default) with `FromStr`.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Validate that a publishable key has the expected shape.
fn validate_publishable_key(key: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = key.expose_secret();
    let Some(body) = value.strip_prefix(PUBLISHABLE_KEY_PREFIX) else {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("must start with '{PUBLISHABLE_KEY_PREFIX}'"),
        ));
    };
    validate_secret_strength(body, var_name)
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Copy the key from the backend admin."
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        // "ab" has entropy of 1 bit per char (50% a, 50% b)
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_publishable_key_requires_prefix() {
        let key = SecretString::from("0b591cae14c9e6ab7f3d8e2a5c4f1b90");
        let err = validate_publishable_key(&key, "TEST_KEY").unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_publishable_key_rejects_placeholder() {
        let key = SecretString::from("pk_your-key-here");
        assert!(validate_publishable_key(&key, "TEST_KEY").is_err());
    }

    #[test]
    fn test_publishable_key_rejects_low_entropy() {
        let key = SecretString::from("pk_aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
        assert!(validate_publishable_key(&key, "TEST_KEY").is_err());
    }

    #[test]
    fn test_publishable_key_valid() {
        let key = SecretString::from("pk_0b591cae14c9e6ab7f3d8e2a5c4f1b90d7e3a6c2");
        assert!(validate_publishable_key(&key, "TEST_KEY").is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 8000,
            store_name: "Test Store".to_string(),
            default_country: CountryCode::parse("us").unwrap(),
            products_per_page: 12,
            medusa: MedusaConfig {
                backend_url: Url::parse("http://localhost:9000").unwrap(),
                publishable_key: SecretString::from("pk_test"),
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_from_env_needs_only_backend_settings() {
        // SAFETY: no other test in this crate reads the process environment
        unsafe {
            std::env::set_var("MEDUSA_BACKEND_URL", "http://localhost:9000");
            std::env::set_var(
                "MEDUSA_PUBLISHABLE_KEY",
                "pk_0b591cae14c9e6ab7f3d8e2a5c4f1b90d7e3a6c2",
            );
            std::env::remove_var("STOREFRONT_BASE_URL");
        }

        let config = StorefrontConfig::from_env().unwrap();
        assert_eq!(config.medusa.backend_url.as_str(), "http://localhost:9000/");
        assert_eq!(config.products_per_page, 12);
    }

    #[test]
    fn test_medusa_config_debug_redacts_key() {
        let config = MedusaConfig {
            backend_url: Url::parse("http://localhost:9000").unwrap(),
            publishable_key: SecretString::from("pk_super_secret_value"),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("localhost:9000"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("pk_super_secret_value"));
    }
}
